//! Input sanitization for user prompts.
//! The reply page renders prompts and replies back as text, so raw markup
//! is refused rather than echoed.

use tracing::warn;

/// Longest prompt the pipeline will accept; the rest is cut off.
pub const MAX_PROMPT_CHARS: usize = 2000;

/// Markup fragments that should never pass through the pipeline.
const MARKUP_PATTERNS: &[&str] = &[
    "<script",
    "</script",
    "<iframe",
    "<object",
    "<embed",
    "javascript:",
    "onerror=",
    "onload=",
];

/// Check if a prompt contains markup that would be echoed into the page.
pub fn contains_markup(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    MARKUP_PATTERNS
        .iter()
        .any(|pattern| text_lower.contains(pattern))
}

/// Validate a prompt before generation.
pub fn validate_prompt(text: &str) -> bool {
    if contains_markup(text) {
        warn!("Blocked prompt containing markup");
        return false;
    }
    true
}

/// Normalize a raw prompt: drop control characters (newlines survive),
/// collapse runs of spaces and tabs, trim, and cap the length.
pub fn normalize_prompt(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_control() || *ch == '\n')
        .collect();

    let collapsed = collapse_spaces(&cleaned);
    let trimmed = collapsed.trim();

    trimmed.chars().take(MAX_PROMPT_CHARS).collect()
}

/// Collapse runs of spaces and tabs to a single space.
fn collapse_spaces(text: &str) -> String {
    let mut result = text.to_string();
    let re = regex_lite::Regex::new(r"[ \t]+").ok();
    if let Some(regex) = re {
        result = regex.replace_all(&result, " ").to_string();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_detection() {
        assert!(contains_markup("hello <script>alert(1)</script>"));
        assert!(contains_markup("<IFRAME src=x>"));
        assert!(contains_markup("click javascript:void(0)"));
        assert!(!contains_markup("a quiet lake at dawn"));
    }

    #[test]
    fn validate_rejects_markup_only() {
        assert!(!validate_prompt("<script>boom</script>"));
        assert!(validate_prompt("write about autumn"));
    }

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize_prompt("  a   quiet\t lake  "), "a quiet lake");
    }

    #[test]
    fn normalize_strips_control_characters_but_keeps_newlines() {
        assert_eq!(normalize_prompt("a\u{0000}b\u{0007}c"), "abc");
        assert_eq!(normalize_prompt("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn normalize_caps_length() {
        let long = "x".repeat(MAX_PROMPT_CHARS + 500);
        assert_eq!(normalize_prompt(&long).chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_prompt("  a   quiet\nlake  ");
        assert_eq!(normalize_prompt(&once), once);
    }
}
