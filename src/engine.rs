//! Local text generation: request seeding, content expansion, device
//! injection, optional content blocks, and final assembly.
//!
//! There is no model inference here. Replies are synthesized from the
//! prompt itself plus small fixed phrase pools, selected by a pseudo-random
//! generator seeded from the request fields. Identical requests therefore
//! reproduce identical replies within one process; the seed hash is not a
//! portable determinism mechanism and is not treated as a contract.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::format;
use crate::options::GenerationRequest;
use crate::segment;

pub const EMPTY_PROMPT_REPLY: &str = "Please provide a prompt to write about.";
pub const MARKUP_REPLY: &str =
    "That prompt looks like markup. Please describe what you want in plain text.";
pub const FAULT_REPLY: &str =
    "The request could not be processed safely (generation fault). Please adjust your inputs and try again.";

const PLACEHOLDER_SENTENCE: &str = "A quiet idea waits for its opening line";

const FOCUS_WORDS: &[&str] = &["clarity", "imagery", "structure", "momentum"];
const CONSIDER_WORDS: &[&str] = &["audience needs", "pacing", "contrast", "voice"];

const SPICE_POOL: &[&str] = &[
    "crisp", "velvet", "luminous", "tactile", "whispering", "electric", "quiet", "bold",
    "nuanced", "sparkling", "grainy", "sleek", "playful", "intense",
];

const METAPHOR_CLAUSES: &[&str] = &[
    "like a tide finding its shore",
    "like a lantern carried through fog",
    "like a chord resolving at last",
];

const SENSORY_CLAUSES: &[&str] = &[
    "with the scent of rain on warm stone",
    "under the low hum of evening light",
    "against the rough grain of worn wood",
];

const QUESTION_CLAUSES: &[&str] = &[
    "and what would it take to go one step further?",
    "and who is this really for?",
    "and where does the momentum come from?",
];

const RULE_OF_THREE_CLAUSE: &str = "built on rhythm, contrast, and momentum";

const ALLITERATION_TRIGGER: &str = "idea";
const ALLITERATION_REPLACEMENT: &str = "incandescent idea";

const TITLE_WORDS: &[&str] = &["Concept", "Draft", "Sketch", "Cut", "Take"];

const TLDR_LINES: &[&str] = &[
    "Keep it focused, vivid, and audience-first.",
    "Lead with benefits; close with momentum.",
    "Offer choices, show stakes, invite action.",
];

const IDEA_LINES: &[&str] = &[
    "A surprising opening that re-frames the problem",
    "A contrast pair (before/after) to highlight value",
    "A closing beat that points to the next step",
];

const NEXT_PROMPT_LINE: &str = "Next prompt: Try refining the audience and constraints.";

pub struct Musebot;

impl Musebot {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline for one request. Total: every input produces a
    /// reply string, never an error.
    pub fn generate(&self, req: &GenerationRequest) -> String {
        if req.prompt.is_empty() {
            return EMPTY_PROMPT_REPLY.to_string();
        }

        let mut rng = StdRng::seed_from_u64(request_seed(req));
        let (min, max) = req.length.bounds();
        let target = rng.gen_range(min..=max);

        let mut sentences = compose(req, target, &mut rng);
        inject_devices(&mut sentences, req.creativity, &mut rng);

        let mut text = sentences.join(". ");
        text.push('.');
        text = attach_blocks(text, req, &mut rng);

        let formatted = format::render(req.format, &text);
        format::apply_constraints(formatted, &req.extras, req.format, &mut rng)
    }
}

/// Derive the request-scoped RNG seed from every field that shapes the
/// reply. Per-process repeatability only; std hashing is not stable across
/// builds and nothing downstream assumes it is.
fn request_seed(req: &GenerationRequest) -> u64 {
    let mut hasher = DefaultHasher::new();
    req.role.name().hash(&mut hasher);
    req.tone.name().hash(&mut hasher);
    req.format.name().hash(&mut hasher);
    req.length.name().hash(&mut hasher);
    req.creativity.to_bits().hash(&mut hasher);
    req.prompt.hash(&mut hasher);
    hasher.finish()
}

/// Build the sentence sequence: opening plus prompt, creativity spice,
/// then expansion with quirk or generic filler sentences until the target
/// count is reached. Always returns exactly `target` sentences.
fn compose(req: &GenerationRequest, target: usize, rng: &mut StdRng) -> Vec<String> {
    let profile = req.role.profile();

    let mut base = format!("{}{}", profile.opening, req.prompt);
    add_spice(&mut base, req.creativity, rng);

    let mut sentences = segment::split_sentences(&base);
    if sentences.is_empty() {
        sentences.push(PLACEHOLDER_SENTENCE.to_string());
    }

    while sentences.len() < target {
        let next = if rng.gen_bool(0.5) {
            profile
                .quirks
                .choose(rng)
                .copied()
                .unwrap_or("Use one clear image")
                .to_string()
        } else {
            generic_filler(req, rng)
        };
        sentences.push(next);
    }
    sentences.truncate(target);
    sentences
}

/// Append up to five random adjectives from the spice pool as one extra
/// sentence. Zero creativity appends nothing.
fn add_spice(base: &mut String, creativity: f64, rng: &mut StdRng) {
    let k = ((creativity * 5.0) as usize).min(5);
    if k == 0 {
        return;
    }
    let picks: Vec<&str> = SPICE_POOL.choose_multiple(rng, k).copied().collect();
    base.push(' ');
    base.push_str(&picks.join(", "));
    base.push('.');
}

/// One generic filler sentence: a tone, format, focus, consider, or voice
/// callout.
fn generic_filler(req: &GenerationRequest, rng: &mut StdRng) -> String {
    match rng.gen_range(0..5) {
        0 => format!("Tone: {}", req.tone.name().to_lowercase()),
        1 => format!("Format: {}", req.format.name().to_lowercase()),
        2 => format!(
            "Focus on: {}",
            FOCUS_WORDS.choose(rng).copied().unwrap_or("clarity")
        ),
        3 => format!(
            "Consider: {}",
            CONSIDER_WORDS.choose(rng).copied().unwrap_or("pacing")
        ),
        _ => format!("Voice: {}", req.role.profile().voice.to_lowercase()),
    }
}

/// Creativity-gated stylistic devices, applied in fixed order. Devices only
/// append clauses inside existing sentences or substitute a token, so the
/// sentence count never changes. Clause pools contain no periods for the
/// same reason.
fn inject_devices(sentences: &mut [String], creativity: f64, rng: &mut StdRng) {
    if sentences.is_empty() {
        return;
    }

    // Metaphor
    if rng.gen_bool(creativity * 0.6) {
        let clause = METAPHOR_CLAUSES
            .choose(rng)
            .copied()
            .unwrap_or("like a tide finding its shore");
        if let Some(last) = sentences.last_mut() {
            last.push_str(", ");
            last.push_str(clause);
        }
    }

    // Alliteration
    if rng.gen_bool(creativity * 0.5) {
        for sentence in sentences.iter_mut() {
            if sentence.contains(ALLITERATION_TRIGGER) {
                *sentence = sentence.replace(ALLITERATION_TRIGGER, ALLITERATION_REPLACEMENT);
            }
        }
    }

    // Rule of three
    if rng.gen_bool(creativity * 0.4) {
        let idx = rng.gen_range(0..sentences.len());
        sentences[idx].push_str(", ");
        sentences[idx].push_str(RULE_OF_THREE_CLAUSE);
    }

    // Rhetorical question, only once there is enough text to question
    if sentences.len() >= 3 && rng.gen_bool(creativity * 0.5) {
        let clause = QUESTION_CLAUSES
            .choose(rng)
            .copied()
            .unwrap_or("and where does the momentum come from?");
        if let Some(last) = sentences.last_mut() {
            last.push_str(", ");
            last.push_str(clause);
        }
    }

    // Sensory detail
    if rng.gen_bool(creativity * 0.6) {
        let clause = SENSORY_CLAUSES
            .choose(rng)
            .copied()
            .unwrap_or("under the low hum of evening light");
        let idx = rng.gen_range(0..sentences.len());
        sentences[idx].push_str(", ");
        sentences[idx].push_str(clause);
    }
}

/// Optional content blocks, attached between assembly and formatting.
fn attach_blocks(mut text: String, req: &GenerationRequest, rng: &mut StdRng) -> String {
    if req.extras.title {
        let word = TITLE_WORDS.choose(rng).copied().unwrap_or("Draft");
        text = format!("{} — {}\n\n{}", req.role.name(), word, text);
    }
    if req.extras.tldr {
        text.push_str("\n\nTL;DR: ");
        text.push_str(
            TLDR_LINES
                .choose(rng)
                .copied()
                .unwrap_or("Keep it focused, vivid, and audience-first."),
        );
    }
    if req.extras.ideas3 {
        text.push_str("\n\nThree ideas:");
        for idea in IDEA_LINES {
            text.push_str("\n- ");
            text.push_str(idea);
        }
    }
    if req.extras.next_prompt {
        text.push_str("\n\n");
        text.push_str(NEXT_PROMPT_LINE);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Extras, LengthBucket, OutputFormat};
    use crate::roles::{Role, Tone};

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            role: Role::Storyteller,
            tone: Tone::Friendly,
            format: OutputFormat::Paragraph,
            length: LengthBucket::Medium,
            creativity: 0.5,
            prompt: prompt.to_string(),
            extras: Extras::default(),
        }
    }

    /// Outline output has one numbered line per pre-format sentence, so it
    /// exposes the sequence length through the public surface.
    fn sequence_len(req: &GenerationRequest) -> usize {
        let mut outlined = req.clone();
        outlined.format = OutputFormat::Outline;
        Musebot::new().generate(&outlined).lines().count()
    }

    #[test]
    fn empty_prompt_short_circuits() {
        let mut req = request("");
        req.role = Role::Poet;
        req.format = OutputFormat::Dialogue;
        assert_eq!(
            Musebot::new().generate(&req),
            "Please provide a prompt to write about."
        );
    }

    #[test]
    fn sequence_length_stays_within_bucket_bounds() {
        for &length in LengthBucket::ALL {
            let (min, max) = length.bounds();
            for creativity in [0.0, 0.5, 1.0] {
                for prompt in ["The lake is still.", "One. Two. Three. Four. Five."] {
                    let mut req = request(prompt);
                    req.length = length;
                    req.creativity = creativity;
                    let len = sequence_len(&req);
                    assert!(
                        (min..=max).contains(&len),
                        "{:?} c={} produced {} sentences",
                        length,
                        creativity,
                        len
                    );
                }
            }
        }
    }

    #[test]
    fn overlong_input_is_truncated_to_bucket_max() {
        let long_prompt = (0..30)
            .map(|i| format!("Sentence number {i}."))
            .collect::<Vec<_>>()
            .join(" ");
        let mut req = request(&long_prompt);
        req.length = LengthBucket::Short;
        let len = sequence_len(&req);
        assert!((4..=6).contains(&len));
    }

    #[test]
    fn identical_requests_reproduce_identical_replies() {
        let mut req = request("A market at dusk, lanterns everywhere.");
        req.creativity = 0.8;
        req.extras.quote = true;
        req.extras.title = true;
        let bot = Musebot::new();
        assert_eq!(bot.generate(&req), bot.generate(&req));
    }

    #[test]
    fn different_prompts_get_different_seeds() {
        let a = request("A market at dusk.");
        let b = request("A harbor at dawn.");
        assert_ne!(request_seed(&a), request_seed(&b));
    }

    #[test]
    fn poet_short_bulleted_scenario() {
        let req = GenerationRequest {
            role: Role::Poet,
            tone: Tone::Friendly,
            format: OutputFormat::BulletedList,
            length: LengthBucket::Short,
            creativity: 0.0,
            prompt: "The lake is still.".to_string(),
            extras: Extras::default(),
        };
        let reply = Musebot::new().generate(&req);
        let lines: Vec<&str> = reply.lines().collect();
        assert!((4..=6).contains(&lines.len()), "got {} lines", lines.len());
        for line in &lines {
            assert!(line.starts_with("• "));
            assert!(line.ends_with('.'));
        }
        assert!(lines[0].contains("The lake is still"));
    }

    #[test]
    fn cta_is_always_the_final_block() {
        let mut req = request("Announce the new trail map.");
        req.extras.cta = true;
        req.extras.quote = true;
        req.format = OutputFormat::Outline;
        let reply = Musebot::new().generate(&req);
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[lines.len() - 2], "");
        assert_eq!(
            lines[lines.len() - 1],
            "→ Try it now and share your next prompt."
        );
    }

    #[test]
    fn title_block_prepends_role_name() {
        let mut req = request("A castle on a cliff.");
        req.extras.title = true;
        let reply = Musebot::new().generate(&req);
        assert!(reply.starts_with("Storyteller"));
    }

    #[test]
    fn punctuation_only_prompt_uses_placeholder() {
        // Poet has an empty opening phrase, so nothing survives segmentation.
        let mut req = request("...");
        req.role = Role::Poet;
        req.format = OutputFormat::Outline;
        req.creativity = 0.0;
        let reply = Musebot::new().generate(&req);
        assert!(reply.lines().next().unwrap().contains(PLACEHOLDER_SENTENCE));
    }

    #[test]
    fn zero_creativity_adds_no_spice() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut base = "The lake is still.".to_string();
        add_spice(&mut base, 0.0, &mut rng);
        assert_eq!(base, "The lake is still.");
    }

    #[test]
    fn zero_creativity_injects_no_devices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sentences = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let before = sentences.clone();
        inject_devices(&mut sentences, 0.0, &mut rng);
        assert_eq!(sentences, before);
    }

    #[test]
    fn full_creativity_keeps_clauses_inside_sentences() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sentences = vec![
            "an idea takes shape".to_string(),
            "the room is quiet".to_string(),
            "the work begins".to_string(),
        ];
        inject_devices(&mut sentences, 1.0, &mut rng);
        assert_eq!(sentences.len(), 3);
        for sentence in &sentences {
            assert!(!sentence.contains('.'), "device added a period: {sentence}");
        }
    }

    #[test]
    fn device_clause_pools_contain_no_periods() {
        for clause in METAPHOR_CLAUSES
            .iter()
            .chain(SENSORY_CLAUSES)
            .chain(QUESTION_CLAUSES)
            .chain([RULE_OF_THREE_CLAUSE].iter())
        {
            assert!(!clause.contains('.'), "clause with period: {clause}");
        }
    }
}
