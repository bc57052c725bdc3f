//! Output rendering: the four format renderers and the constraint
//! post-processors applied after formatting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::options::{Extras, OutputFormat};
use crate::segment;

const BULLET: &str = "•";
const PARAGRAPH_WIDTH: usize = 90;
const SPEAKERS: [&str; 2] = ["You", "Bot"];

pub const CTA_LINE: &str = "→ Try it now and share your next prompt.";

const APHORISMS: &[&str] = &[
    "Simplicity sharpens ideas.",
    "Contrast creates clarity.",
    "Small steps compound into journeys.",
];

/// Re-render assembled text into the selected output format.
pub fn render(format: OutputFormat, text: &str) -> String {
    match format {
        OutputFormat::Paragraph => segment::wrap(text, PARAGRAPH_WIDTH),
        OutputFormat::BulletedList => segment::split_sentences(text)
            .iter()
            .map(|part| format!("{BULLET} {part}."))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Outline => segment::split_sentences(text)
            .iter()
            .enumerate()
            .map(|(i, part)| format!("{}. {}.", i + 1, part))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Dialogue => segment::split_sentences(text)
            .iter()
            .enumerate()
            .map(|(i, part)| format!("{}: {}.", SPEAKERS[i % 2], part))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Apply the constraint post-processors in fixed order. Each is optional
/// and independent; none can fail.
///
/// Force-bullets re-splits the already-formatted text on periods, so on
/// Outline or Dialogue output the bullets embed the numbering or speaker
/// prefixes verbatim. Known quirk, kept for parity with the original
/// behavior.
pub fn apply_constraints(
    mut text: String,
    extras: &Extras,
    format: OutputFormat,
    rng: &mut StdRng,
) -> String {
    if extras.no_emojis {
        text = strip_non_ascii(&text);
    }
    if extras.force_bullets && format != OutputFormat::BulletedList {
        text = segment::split_sentences(&text)
            .iter()
            .map(|line| format!("{BULLET} {line}"))
            .collect::<Vec<_>>()
            .join("\n");
    }
    if extras.quote {
        let aphorism = APHORISMS
            .choose(rng)
            .copied()
            .unwrap_or("Simplicity sharpens ideas.");
        text.push_str(&format!("\n\n\"{aphorism}\""));
    }
    if extras.cta {
        text.push_str(&format!("\n\n{CTA_LINE}"));
    }
    text
}

/// Drop every character outside the ASCII range. Idempotent.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}
