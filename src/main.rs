//! prompt-forge - command line front end for the prompt processor

use anyhow::Result;
use clap::{Parser, Subcommand};
use prompt_forge::config::{Config, ConfigOptions};
use prompt_forge::{KeywordSubstitutions, PromptProcessor};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "prompt-forge")]
#[command(about = "Enhance, analyze and generate variations of prompts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append the highest-weighted enhancement to a prompt
    Enhance {
        /// Base prompt
        #[arg(short, long)]
        prompt: String,

        /// Candidate enhancement (repeatable, paired with --weight by position)
        #[arg(short, long = "enhancement")]
        enhancements: Vec<String>,

        /// Weight for the enhancement at the same position (repeatable)
        #[arg(short, long = "weight", allow_negative_numbers = true)]
        weights: Vec<f64>,
    },

    /// Print clarity score and suggestions as JSON
    Analyze {
        /// Prompt to analyze
        #[arg(short, long)]
        prompt: String,

        /// Minimum prompt length in bytes
        #[arg(long)]
        min_length: Option<usize>,

        /// Penalty for ambiguous references
        #[arg(long)]
        ambiguity_penalty: Option<u32>,

        /// Penalty for prompts below the minimum length
        #[arg(long)]
        length_penalty: Option<u32>,

        /// Penalty for prompts without an explicit instruction
        #[arg(long)]
        instruction_penalty: Option<u32>,
    },

    /// Print keyword-substitution variations as a JSON array
    Vary {
        /// Seed prompt
        #[arg(short, long)]
        prompt: String,

        /// Substitution as KEYWORD=R1,R2,... (repeatable, applied in order)
        #[arg(short, long = "sub", value_parser = parse_substitution)]
        subs: Vec<(String, Vec<String>)>,
    },

    /// Print the premium resources URL
    PremiumUrl,
}

/// Parse `KEYWORD=R1,R2,...`; `KEYWORD=` yields an empty replacement list
fn parse_substitution(s: &str) -> std::result::Result<(String, Vec<String>), String> {
    let (keyword, replacements) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEYWORD=R1,R2,..., got '{}'", s))?;

    let replacements = if replacements.is_empty() {
        Vec::new()
    } else {
        replacements.split(',').map(str::to_string).collect()
    };

    Ok((keyword.to_string(), replacements))
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Enhance {
            prompt,
            enhancements,
            weights,
        } => {
            let processor = PromptProcessor::default();
            let enhanced = processor.enhance(&prompt, &enhancements, &weights)?;
            println!("{}", enhanced);
        }
        Commands::Analyze {
            prompt,
            min_length,
            ambiguity_penalty,
            length_penalty,
            instruction_penalty,
        } => {
            let config = Config::new(ConfigOptions {
                min_prompt_length: min_length,
                ambiguity_penalty,
                length_penalty,
                instruction_penalty,
            })?;
            let analysis = PromptProcessor::new(config).analyze(&prompt);
            info!("Clarity score: {}", analysis.clarity_score);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Vary { prompt, subs } => {
            let substitutions: KeywordSubstitutions = subs.into_iter().collect();
            let variations =
                PromptProcessor::default().generate_variations(&prompt, &substitutions)?;
            println!("{}", serde_json::to_string_pretty(&variations)?);
        }
        Commands::PremiumUrl => {
            println!("{}", PromptProcessor::default().premium_url());
        }
    }

    Ok(())
}

fn main() {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
