//! Configuration module - analyzer thresholds and penalties

use std::sync::Arc;

use crate::error::{PromptError, Result};

/// Prompts shorter than this many bytes get the length suggestion
pub const DEFAULT_MIN_PROMPT_LENGTH: usize = 20;
pub const DEFAULT_AMBIGUITY_PENALTY: u32 = 10;
pub const DEFAULT_LENGTH_PENALTY: u32 = 20;
pub const DEFAULT_INSTRUCTION_PENALTY: u32 = 5;

/// Baseline clarity score before any check subtracts from it
pub const BASELINE_CLARITY_SCORE: u32 = 100;

/// Optional configuration parameters for Config::new()
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub min_prompt_length: Option<usize>,
    pub ambiguity_penalty: Option<u32>,
    pub length_penalty: Option<u32>,
    pub instruction_penalty: Option<u32>,
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub min_prompt_length: usize,
    pub ambiguity_penalty: u32,
    pub length_penalty: u32,
    pub instruction_penalty: u32,
}

impl Config {
    /// Create a new Config, filling unset options with the defaults
    pub fn new(options: ConfigOptions) -> Result<Arc<Self>> {
        let config = Self {
            min_prompt_length: options
                .min_prompt_length
                .unwrap_or(DEFAULT_MIN_PROMPT_LENGTH),
            ambiguity_penalty: options
                .ambiguity_penalty
                .unwrap_or(DEFAULT_AMBIGUITY_PENALTY),
            length_penalty: options.length_penalty.unwrap_or(DEFAULT_LENGTH_PENALTY),
            instruction_penalty: options
                .instruction_penalty
                .unwrap_or(DEFAULT_INSTRUCTION_PENALTY),
        };

        for (name, value) in [
            ("ambiguity_penalty", config.ambiguity_penalty),
            ("length_penalty", config.length_penalty),
            ("instruction_penalty", config.instruction_penalty),
        ] {
            if value > BASELINE_CLARITY_SCORE {
                return Err(PromptError::InvalidConfig(format!(
                    "{} must be at most {}, got {}",
                    name, BASELINE_CLARITY_SCORE, value
                )));
            }
        }

        Ok(Arc::new(config))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_prompt_length: DEFAULT_MIN_PROMPT_LENGTH,
            ambiguity_penalty: DEFAULT_AMBIGUITY_PENALTY,
            length_penalty: DEFAULT_LENGTH_PENALTY,
            instruction_penalty: DEFAULT_INSTRUCTION_PENALTY,
        }
    }
}
