//! Tests for prompt analysis

use std::sync::Arc;

use prompt_forge::config::{Config, ConfigOptions};
use prompt_forge::processor::analyze::analyze;
use prompt_forge::processor::templates::{
    AMBIGUITY_SUGGESTION, INSTRUCTION_SUGGESTION, LENGTH_SUGGESTION,
};
use prompt_forge::{Analysis, PromptProcessor};

fn analyze_default(prompt: &str) -> Analysis {
    analyze(prompt, &Config::default())
}

// ========================================================================
// Individual Check Tests
// ========================================================================

#[test]
fn test_analyze_short_ambiguous_prompt() {
    let analysis = analyze_default("fix it");
    assert_eq!(
        analysis.suggestions,
        vec![
            AMBIGUITY_SUGGESTION.to_string(),
            LENGTH_SUGGESTION.to_string(),
            INSTRUCTION_SUGGESTION.to_string(),
        ]
    );
    assert_eq!(analysis.clarity_score, 65);
}

#[test]
fn test_analyze_clean_prompt() {
    let analysis = analyze_default(
        "Please generate a detailed landscape painting of a specific mountain at sunset",
    );
    assert!(analysis.suggestions.is_empty());
    assert!(analysis.is_clean());
    assert_eq!(analysis.clarity_score, 100);
}

#[test]
fn test_analyze_ambiguity_is_case_insensitive() {
    let analysis = analyze_default("Please generate THIS picture for me now");
    assert_eq!(analysis.suggestions, vec![AMBIGUITY_SUGGESTION.to_string()]);
    assert_eq!(analysis.clarity_score, 90);
}

#[test]
fn test_analyze_ambiguity_matches_inside_words() {
    // "thistle" contains "this", "kitten" contains "it"
    let thistle = analyze_default("Please generate a purple thistle field");
    assert_eq!(thistle.suggestions, vec![AMBIGUITY_SUGGESTION.to_string()]);

    let kitten = analyze_default("Please generate a sleeping kitten");
    assert_eq!(kitten.suggestions, vec![AMBIGUITY_SUGGESTION.to_string()]);
}

#[test]
fn test_analyze_length_boundary() {
    // 19 characters, no ambiguous tokens
    let short = analyze_default("Please draw a frog.");
    assert_eq!(short.suggestions, vec![LENGTH_SUGGESTION.to_string()]);
    assert_eq!(short.clarity_score, 80);

    // 20 characters
    let exact = analyze_default("Please draw a frogs.");
    assert!(exact.is_clean());
    assert_eq!(exact.clarity_score, 100);
}

#[test]
fn test_analyze_length_counts_bytes() {
    // 19 characters, 20 bytes
    let prompt = "Please draw a cafés";
    assert_eq!(prompt.chars().count(), 19);
    assert_eq!(prompt.len(), 20);
    let analysis = analyze_default(prompt);
    assert!(analysis.is_clean());
    assert_eq!(analysis.clarity_score, 100);

    // 18 characters, 19 bytes
    let shorter = analyze_default("Please draw a café");
    assert_eq!(shorter.suggestions, vec![LENGTH_SUGGESTION.to_string()]);
    assert_eq!(shorter.clarity_score, 80);
}

#[test]
fn test_analyze_instruction_keywords() {
    let with_generate = analyze_default("GENERATE a watercolor of a harbor");
    assert!(with_generate.is_clean());

    let without = analyze_default("A watercolor of a harbor at dawn");
    assert_eq!(without.suggestions, vec![INSTRUCTION_SUGGESTION.to_string()]);
    assert_eq!(without.clarity_score, 95);
}

#[test]
fn test_analyze_empty_prompt() {
    let analysis = analyze_default("");
    assert_eq!(
        analysis.suggestions,
        vec![
            LENGTH_SUGGESTION.to_string(),
            INSTRUCTION_SUGGESTION.to_string()
        ]
    );
    assert_eq!(analysis.clarity_score, 75);
}

#[test]
fn test_analyze_score_bounds() {
    let prompts = [
        "",
        "it",
        "fix it",
        "this",
        "Please generate a detailed landscape painting of a specific mountain at sunset",
        "do something with it and this and that, please",
    ];
    for prompt in prompts {
        let analysis = analyze_default(prompt);
        assert!(analysis.clarity_score <= 100, "prompt: {:?}", prompt);
    }
}

// ========================================================================
// Configured Analyzer Tests
// ========================================================================

#[test]
fn test_analyze_custom_penalties() {
    let config = Config::new(ConfigOptions {
        min_prompt_length: Some(5),
        ambiguity_penalty: Some(50),
        instruction_penalty: Some(30),
        ..Default::default()
    })
    .unwrap();

    let analysis = analyze("fix it", &config);
    assert_eq!(analysis.suggestions.len(), 2);
    assert_eq!(analysis.clarity_score, 20);
}

#[test]
fn test_analyze_score_clamped_at_zero() {
    let config = Config::new(ConfigOptions {
        ambiguity_penalty: Some(100),
        length_penalty: Some(100),
        instruction_penalty: Some(100),
        ..Default::default()
    })
    .unwrap();

    let analysis = analyze("fix it", &config);
    assert_eq!(analysis.suggestions.len(), 3);
    assert_eq!(analysis.clarity_score, 0);
}

#[test]
fn test_processor_analyze_uses_config() {
    let config = Config::new(ConfigOptions {
        min_prompt_length: Some(100),
        ..Default::default()
    })
    .unwrap();
    let processor = PromptProcessor::new(Arc::clone(&config));

    let analysis = processor.analyze("Please generate a drawing of a sailor");
    assert_eq!(analysis.suggestions, vec![LENGTH_SUGGESTION.to_string()]);
}

// ========================================================================
// Serialization Tests
// ========================================================================

#[test]
fn test_analysis_serialization() {
    let analysis = analyze_default("fix it");
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["clarity_score"], 65);
    assert_eq!(json["suggestions"].as_array().map(Vec::len), Some(3));

    let back: Analysis = serde_json::from_value(json).unwrap();
    assert_eq!(back, analysis);
}
