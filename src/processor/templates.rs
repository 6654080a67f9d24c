//! Fixed strings returned by the processor

/// Base URL for premium prompt resources
pub const PREMIUM_URL: &str =
    "https://supermaker.ai/blog/nano-banana-pro-prompt-use-cases-ready-to-copy-paste/";

/// Suggestion for prompts containing "it" or "this"
pub const AMBIGUITY_SUGGESTION: &str =
    "Consider replacing ambiguous pronouns like \"it\" or \"this\" with more specific references.";

/// Suggestion for prompts below the minimum length
pub const LENGTH_SUGGESTION: &str =
    "The prompt may lack sufficient context. Consider adding more detail to guide the model.";

/// Suggestion for prompts without "please" or "generate"
pub const INSTRUCTION_SUGGESTION: &str =
    "Consider adding explicit instructions, such as \"Please generate\" or \"Please provide\".";

/// Case-insensitive substrings treated as ambiguous references.
/// Matched anywhere, not on word boundaries ("thistle" counts).
pub const AMBIGUOUS_TOKENS: &[&str] = &["it", "this"];

/// Case-insensitive substrings treated as an explicit instruction
pub const INSTRUCTION_TOKENS: &[&str] = &["please", "generate"];
