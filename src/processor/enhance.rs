//! Enhancement selection by normalized weight

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PromptError, Result};

/// An enhancement paired with its normalized weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEnhancement {
    pub enhancement: String,
    pub weight: f64,
}

/// Normalize weights to sum to 1 and sort enhancements by weight, highest first.
///
/// The sort is stable, so enhancements with equal weights keep their input
/// order and the first one listed wins a tie.
///
/// # Errors
/// * `LengthMismatch` - `enhancements` and `weights` differ in length
/// * `EmptyEnhancements` - nothing to rank
/// * `ZeroWeightSum` - the weights sum to zero
pub fn rank_enhancements<S: AsRef<str>>(
    enhancements: &[S],
    weights: &[f64],
) -> Result<Vec<WeightedEnhancement>> {
    if enhancements.len() != weights.len() {
        return Err(PromptError::LengthMismatch {
            enhancements: enhancements.len(),
            weights: weights.len(),
        });
    }

    if enhancements.is_empty() {
        return Err(PromptError::EmptyEnhancements);
    }

    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return Err(PromptError::ZeroWeightSum);
    }

    let mut ranked: Vec<WeightedEnhancement> = enhancements
        .iter()
        .zip(weights)
        .map(|(enhancement, weight)| WeightedEnhancement {
            enhancement: enhancement.as_ref().to_string(),
            weight: weight / total_weight,
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    Ok(ranked)
}

/// Append the highest-weighted enhancement to `base_prompt`.
///
/// The result is `"{base_prompt} {enhancement}"` with surrounding whitespace
/// trimmed.
pub fn enhance<S: AsRef<str>>(
    base_prompt: &str,
    enhancements: &[S],
    weights: &[f64],
) -> Result<String> {
    let ranked = rank_enhancements(enhancements, weights)?;

    // rank_enhancements rejects empty input
    let best = &ranked[0];
    debug!(
        "Selected enhancement {:?} with normalized weight {:.4} out of {}",
        best.enhancement,
        best.weight,
        ranked.len()
    );

    Ok(format!("{} {}", base_prompt, best.enhancement)
        .trim()
        .to_string())
}
