//! Prompt variation generation via keyword substitution

use tracing::debug;

use crate::error::{PromptError, Result};

use super::substitutions::KeywordSubstitutions;

/// Number of variations produced for `distinct_keys` keywords: `round(sqrt(n))`.
/// Halves round away from zero.
pub fn variation_count(distinct_keys: usize) -> usize {
    (distinct_keys as f64).sqrt().round() as usize
}

/// Generate variations of `seed_prompt`.
///
/// Variation `i` replaces every occurrence of each keyword, in the map's
/// iteration order, with `replacements[i % replacements.len()]`. Empty
/// keywords are skipped.
///
/// # Errors
/// `EmptyReplacements` if any keyword has no replacements. This is checked
/// before any variation is built.
pub fn generate_variations(
    seed_prompt: &str,
    substitutions: &KeywordSubstitutions,
) -> Result<Vec<String>> {
    if let Some((keyword, _)) = substitutions
        .iter()
        .find(|(_, replacements)| replacements.is_empty())
    {
        return Err(PromptError::EmptyReplacements {
            keyword: keyword.to_string(),
        });
    }

    let count = variation_count(substitutions.len());
    debug!(
        "Generating {} variations from {} keywords",
        count,
        substitutions.len()
    );

    let variations = (0..count)
        .map(|i| {
            substitutions
                .iter()
                .filter(|(keyword, _)| !keyword.is_empty())
                .fold(seed_prompt.to_string(), |prompt, (keyword, replacements)| {
                    prompt.replace(keyword, &replacements[i % replacements.len()])
                })
        })
        .collect();

    Ok(variations)
}
