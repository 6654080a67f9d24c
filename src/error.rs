//! Error types for prompt processing

use thiserror::Error;

/// Result type alias for prompt processing operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Errors raised by the processor.
///
/// Every variant is an invalid-argument failure: the caller passed input the
/// operation cannot act on. Nothing is retried and no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// Enhancement and weight sequences have different lengths
    #[error("The number of enhancements ({enhancements}) must match the number of weights ({weights})")]
    LengthMismatch { enhancements: usize, weights: usize },

    /// No enhancement to select from
    #[error("At least one enhancement is required")]
    EmptyEnhancements,

    /// Weights sum to zero, so they cannot be normalized
    #[error("Enhancement weights must not sum to zero")]
    ZeroWeightSum,

    /// A substitution keyword has no replacements to pick from
    #[error("Keyword '{keyword}' has no replacements")]
    EmptyReplacements { keyword: String },

    /// Analyzer settings out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PromptError {
    /// Whether this error belongs to the invalid-argument class.
    ///
    /// Always true today; callers should prefer this over matching variants so
    /// new causes do not break them.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::EmptyEnhancements
                | Self::ZeroWeightSum
                | Self::EmptyReplacements { .. }
                | Self::InvalidConfig(_)
        )
    }
}
