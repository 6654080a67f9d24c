//! Heuristic prompt analysis

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Config, BASELINE_CLARITY_SCORE};

use super::templates::{
    AMBIGUITY_SUGGESTION, AMBIGUOUS_TOKENS, INSTRUCTION_SUGGESTION, INSTRUCTION_TOKENS,
    LENGTH_SUGGESTION,
};

/// Result of analyzing a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Suggestions in the order the checks ran
    pub suggestions: Vec<String>,
    /// Clarity score in 0..=100
    pub clarity_score: u32,
}

impl Analysis {
    /// True when no check fired
    pub fn is_clean(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Check whether `haystack` contains any of `tokens`, ignoring case.
/// Plain substring search, no word boundaries.
fn contains_any_ignore_case(haystack: &str, tokens: &[&str]) -> bool {
    let lowered = haystack.to_lowercase();
    tokens.iter().any(|token| lowered.contains(token))
}

/// Analyze a prompt for common weaknesses.
///
/// Checks run in a fixed order, each independent of the others:
/// 1. ambiguous reference ("it"/"this" anywhere in the text)
/// 2. prompt shorter than `config.min_prompt_length` bytes
/// 3. no "please" and no "generate"
pub fn analyze(prompt: &str, config: &Config) -> Analysis {
    let mut suggestions = Vec::new();
    let mut score = BASELINE_CLARITY_SCORE as i64;

    if contains_any_ignore_case(prompt, AMBIGUOUS_TOKENS) {
        debug!("Ambiguous reference found");
        suggestions.push(AMBIGUITY_SUGGESTION.to_string());
        score -= config.ambiguity_penalty as i64;
    }

    let length = prompt.len();
    if length < config.min_prompt_length {
        debug!(
            "Prompt length {} below minimum {}",
            length, config.min_prompt_length
        );
        suggestions.push(LENGTH_SUGGESTION.to_string());
        score -= config.length_penalty as i64;
    }

    if !contains_any_ignore_case(prompt, INSTRUCTION_TOKENS) {
        debug!("No explicit instruction found");
        suggestions.push(INSTRUCTION_SUGGESTION.to_string());
        score -= config.instruction_penalty as i64;
    }

    Analysis {
        suggestions,
        clarity_score: score.max(0) as u32,
    }
}
