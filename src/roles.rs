//! Persona configuration: every role the bot can write as, with its voice
//! description, opening phrase, and quirk pool for the content expander.

/// Static voice profile for one role.
pub struct RoleProfile {
    pub voice: &'static str,
    pub opening: &'static str,
    pub quirks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Storyteller,
    MovieDirector,
    GameMaster,
    UxCopywriter,
    DebateCoach,
    TravelPlanner,
    Poet,
    Comedian,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::Storyteller,
        Role::MovieDirector,
        Role::GameMaster,
        Role::UxCopywriter,
        Role::DebateCoach,
        Role::TravelPlanner,
        Role::Poet,
        Role::Comedian,
    ];

    /// Parse a role name. Unknown names fall back to the default role
    /// instead of failing, so role selection is total.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "storyteller" => Role::Storyteller,
            "movie director" => Role::MovieDirector,
            "game master" => Role::GameMaster,
            "ux copywriter" => Role::UxCopywriter,
            "debate coach" => Role::DebateCoach,
            "travel planner" => Role::TravelPlanner,
            "poet" => Role::Poet,
            "comedian" => Role::Comedian,
            _ => Role::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Storyteller => "Storyteller",
            Role::MovieDirector => "Movie Director",
            Role::GameMaster => "Game Master",
            Role::UxCopywriter => "UX Copywriter",
            Role::DebateCoach => "Debate Coach",
            Role::TravelPlanner => "Travel Planner",
            Role::Poet => "Poet",
            Role::Comedian => "Comedian",
        }
    }

    pub fn profile(&self) -> &'static RoleProfile {
        match self {
            Role::Storyteller => &STORYTELLER,
            Role::MovieDirector => &MOVIE_DIRECTOR,
            Role::GameMaster => &GAME_MASTER,
            Role::UxCopywriter => &UX_COPYWRITER,
            Role::DebateCoach => &DEBATE_COACH,
            Role::TravelPlanner => &TRAVEL_PLANNER,
            Role::Poet => &POET,
            Role::Comedian => &COMEDIAN,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Playful,
    Dramatic,
    Inspiring,
    Neutral,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[
        Tone::Friendly,
        Tone::Professional,
        Tone::Playful,
        Tone::Dramatic,
        Tone::Inspiring,
        Tone::Neutral,
    ];

    /// Unknown tone names fall back to Friendly.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "professional" => Tone::Professional,
            "playful" => Tone::Playful,
            "dramatic" => Tone::Dramatic,
            "inspiring" => Tone::Inspiring,
            "neutral" => Tone::Neutral,
            _ => Tone::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Playful => "Playful",
            Tone::Dramatic => "Dramatic",
            Tone::Inspiring => "Inspiring",
            Tone::Neutral => "Neutral",
        }
    }
}

const STORYTELLER: RoleProfile = RoleProfile {
    voice: "Warm, vivid, descriptive; uses narrative arcs and sensory detail",
    opening: "Once more, from the top: ",
    quirks: &[
        "Weave a hook in the opening line",
        "Add a subtle twist near the end",
        "Use one metaphor, not more",
    ],
};

const MOVIE_DIRECTOR: RoleProfile = RoleProfile {
    voice: "Cinematic, scene-driven, visual blocking and camera cues",
    opening: "The scene opens on: ",
    quirks: &[
        "Stage each beat like a shot list",
        "Include sound design hints",
        "End with a cut-to-black moment",
    ],
};

const GAME_MASTER: RoleProfile = RoleProfile {
    voice: "Interactive, second-person, offers choices and consequences",
    opening: "You stand at the threshold: ",
    quirks: &[
        "Present at least two branching options",
        "Describe the environment with one tactical detail",
        "Invite the next action",
    ],
};

const UX_COPYWRITER: RoleProfile = RoleProfile {
    voice: "Clear, concise, benefit-first with microcopy polish",
    opening: "Here's the value in plain language: ",
    quirks: &[
        "Lead with a user benefit",
        "Use active voice",
        "End with a crisp CTA",
    ],
};

const DEBATE_COACH: RoleProfile = RoleProfile {
    voice: "Structured, steelmans opposing views, emphasizes logic and evidence",
    opening: "Thesis: ",
    quirks: &[
        "State the thesis in one line",
        "List the strongest counterpoint fairly",
        "Conclude with an action-oriented takeaway",
    ],
};

const TRAVEL_PLANNER: RoleProfile = RoleProfile {
    voice: "Friendly, practical, locally-savvy with quick tips",
    opening: "Your mini-itinerary: ",
    quirks: &[
        "Add time-of-day suggestions",
        "Note one money-saving tip",
        "Include a photo-worthy stop",
    ],
};

const POET: RoleProfile = RoleProfile {
    voice: "Rhythmic, image-rich, compact lines",
    opening: "",
    quirks: &[
        "Keep lines under twelve words",
        "Use one surprising image",
        "Close with a soft echo",
    ],
};

const COMEDIAN: RoleProfile = RoleProfile {
    voice: "Light, observational humor with a gentle punchline",
    opening: "So here's the thing: ",
    quirks: &[
        "Set up, misdirect, pay off",
        "One self-aware aside",
        "Keep it kind, not cruel",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_falls_back_to_storyteller() {
        assert_eq!(Role::from_name("Astronaut"), Role::Storyteller);
        assert_eq!(Role::from_name(""), Role::Storyteller);
        assert_eq!(
            Role::from_name("Astronaut").profile().voice,
            STORYTELLER.voice
        );
    }

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), *role);
        }
    }

    #[test]
    fn role_parsing_ignores_case_and_whitespace() {
        assert_eq!(Role::from_name("  POET "), Role::Poet);
        assert_eq!(Role::from_name("movie director"), Role::MovieDirector);
    }

    #[test]
    fn every_profile_has_quirks() {
        for role in Role::ALL {
            assert!(!role.profile().quirks.is_empty());
            assert!(!role.profile().voice.is_empty());
        }
    }

    #[test]
    fn quirks_contain_no_sentence_breaks() {
        // The expander pushes quirks as single pseudo-sentences, so a period
        // inside one would corrupt the sentence count after re-segmenting.
        for role in Role::ALL {
            for quirk in role.profile().quirks {
                assert!(!quirk.contains('.'), "quirk with period: {quirk}");
            }
        }
    }

    #[test]
    fn unknown_tone_falls_back_to_friendly() {
        assert_eq!(Tone::from_name("Sarcastic"), Tone::Friendly);
        assert_eq!(Tone::from_name("neutral"), Tone::Neutral);
    }
}
