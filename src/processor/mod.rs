//! Prompt processor module
//! Selects enhancements, analyzes prompts and generates keyword variations

pub mod analyze;
pub mod enhance;
pub mod substitutions;
pub mod templates;
pub mod variations;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

pub use analyze::Analysis;
pub use enhance::WeightedEnhancement;
pub use substitutions::KeywordSubstitutions;
pub use templates::PREMIUM_URL;

/// Stateless prompt processor.
///
/// Holds only read-only analyzer settings, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct PromptProcessor {
    config: Arc<Config>,
}

impl Default for PromptProcessor {
    fn default() -> Self {
        Self::new(Arc::new(Config::default()))
    }
}

impl PromptProcessor {
    /// Create a processor using the given analyzer settings
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append the highest-weighted enhancement to `base_prompt`
    ///
    /// # Arguments
    /// * `base_prompt` - The prompt to extend
    /// * `enhancements` - Candidate extensions
    /// * `weights` - One weight per enhancement, normalized before comparison
    ///
    /// # Returns
    /// `"{base_prompt} {best}"`, trimmed
    pub fn enhance<S: AsRef<str>>(
        &self,
        base_prompt: &str,
        enhancements: &[S],
        weights: &[f64],
    ) -> Result<String> {
        enhance::enhance(base_prompt, enhancements, weights)
    }

    /// Normalized enhancements sorted by weight, highest first
    pub fn rank_enhancements<S: AsRef<str>>(
        &self,
        enhancements: &[S],
        weights: &[f64],
    ) -> Result<Vec<WeightedEnhancement>> {
        enhance::rank_enhancements(enhancements, weights)
    }

    /// Heuristic clarity score and suggestions for `prompt`
    pub fn analyze(&self, prompt: &str) -> Analysis {
        analyze::analyze(prompt, &self.config)
    }

    /// Generate keyword-substitution variations of `seed_prompt`
    ///
    /// # Arguments
    /// * `seed_prompt` - The prompt every variation starts from
    /// * `substitutions` - Keywords and their replacements, applied in insertion order
    ///
    /// # Returns
    /// `round(sqrt(substitutions.len()))` prompts; variation `i` uses
    /// `replacements[i % replacements.len()]` for every keyword
    ///
    /// # Errors
    /// `EmptyReplacements` if any keyword has no replacements
    pub fn generate_variations(
        &self,
        seed_prompt: &str,
        substitutions: &KeywordSubstitutions,
    ) -> Result<Vec<String>> {
        variations::generate_variations(seed_prompt, substitutions)
    }

    /// Fixed URL for premium prompt resources
    pub fn premium_url(&self) -> &'static str {
        PREMIUM_URL
    }
}
