//! prompt-forge library - prompt enhancement, analysis and variation helpers

pub mod config;
pub mod error;
pub mod processor;

// Re-export commonly used types
pub use config::{Config, ConfigOptions};
pub use error::{PromptError, Result};
pub use processor::{
    Analysis, KeywordSubstitutions, PromptProcessor, WeightedEnhancement, PREMIUM_URL,
};
