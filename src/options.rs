//! Request options: output format, length bucket, extras toggles, and the
//! normalized generation request the engine consumes.

use serde::{Deserialize, Serialize};

use crate::models::ChatRequest;
use crate::roles::{Role, Tone};
use crate::security;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Paragraph,
    BulletedList,
    Outline,
    Dialogue,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Paragraph,
        OutputFormat::BulletedList,
        OutputFormat::Outline,
        OutputFormat::Dialogue,
    ];

    /// Unknown format names fall back to Paragraph.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "paragraph" => OutputFormat::Paragraph,
            "bulleted list" => OutputFormat::BulletedList,
            "outline" => OutputFormat::Outline,
            "dialogue" => OutputFormat::Dialogue,
            _ => OutputFormat::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Paragraph => "Paragraph",
            OutputFormat::BulletedList => "Bulleted List",
            OutputFormat::Outline => "Outline",
            OutputFormat::Dialogue => "Dialogue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthBucket {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthBucket {
    pub const ALL: &'static [LengthBucket] =
        &[LengthBucket::Short, LengthBucket::Medium, LengthBucket::Long];

    /// Unknown length names fall back to Medium.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "short" => LengthBucket::Short,
            "medium" => LengthBucket::Medium,
            "long" => LengthBucket::Long,
            _ => LengthBucket::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LengthBucket::Short => "Short",
            LengthBucket::Medium => "Medium",
            LengthBucket::Long => "Long",
        }
    }

    /// Inclusive [min, max] target sentence count for this bucket.
    pub fn bounds(&self) -> (usize, usize) {
        match self {
            LengthBucket::Short => (4, 6),
            LengthBucket::Medium => (7, 11),
            LengthBucket::Long => (12, 18),
        }
    }
}

/// Independent boolean toggles for optional content blocks and output
/// constraints. A fixed record rather than a free-form map, so unrecognized
/// keys are not representable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Extras {
    pub title: bool,
    pub tldr: bool,
    pub ideas3: bool,
    pub next_prompt: bool,
    pub no_emojis: bool,
    pub force_bullets: bool,
    pub quote: bool,
    pub cta: bool,
}

/// One normalized generation request. Built once per incoming call,
/// immutable afterwards, never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub role: Role,
    pub tone: Tone,
    pub format: OutputFormat,
    pub length: LengthBucket,
    pub creativity: f64,
    pub prompt: String,
    pub extras: Extras,
}

impl GenerationRequest {
    /// Normalize a wire-level chat request: resolve option names to closed
    /// enums (unknown names become defaults), clamp creativity into [0, 1],
    /// and sanitize the prompt text.
    pub fn from_wire(req: ChatRequest) -> Self {
        Self {
            role: Role::from_name(&req.role),
            tone: Tone::from_name(&req.tone),
            format: OutputFormat::from_name(&req.format),
            length: LengthBucket::from_name(&req.length),
            creativity: req.creativity.clamp(0.0, 1.0),
            prompt: security::normalize_prompt(&req.text),
            extras: req.extras,
        }
    }
}
