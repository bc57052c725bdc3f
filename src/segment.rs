//! Naive sentence segmentation and paragraph wrapping.
//!
//! Splitting is deliberately simple: newlines become spaces, the text is
//! split on literal periods, and empty pieces are dropped. Abbreviations
//! and decimal numbers are not understood.

/// Split text into trimmed, non-empty pseudo-sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.replace('\n', " ")
        .split('.')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Greedy word-boundary wrap. Words longer than `width` are kept whole on
/// their own line rather than split.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
