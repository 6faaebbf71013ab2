//! Mood presets — complete avatar selections driven from a mood picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AvatarError;
use crate::selection::AvatarSelection;

/// The 8 moods offered by the mood picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoodOption {
    Happy,
    Sad,
    Angry,
    Excited,
    Sleepy,
    Funny,
    Surprised,
    #[default]
    Neutral,
}

impl MoodOption {
    /// All options in picker order.
    pub const ALL: [MoodOption; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Excited,
        Self::Sleepy,
        Self::Funny,
        Self::Surprised,
        Self::Neutral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Excited => "Excited",
            Self::Sleepy => "Sleepy",
            Self::Funny => "Funny",
            Self::Surprised => "Surprised",
            Self::Neutral => "Neutral",
        }
    }

    /// The preset selection for this mood.
    pub fn preset(&self) -> AvatarSelection {
        preset_for(*self)
    }
}

impl fmt::Display for MoodOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodOption {
    type Err = AvatarError;

    /// Case-insensitive match on the option name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AvatarError::UnknownMood(s.to_string()))
    }
}

// Token order: eyes, nose, mouth, hairStyle, hairColor, skinColor, eyebrows.
static PRESETS: [AvatarSelection; 8] = [
    // Happy
    AvatarSelection::from_tokens([
        "normal", "normal", "smile", "short", "brown", "light", "normal",
    ]),
    // Sad
    AvatarSelection::from_tokens([
        "small", "normal", "frown", "short", "brown", "light", "thin",
    ]),
    // Angry
    AvatarSelection::from_tokens([
        "normal", "normal", "frown", "spiky", "black", "light", "angry",
    ]),
    // Excited
    AvatarSelection::from_tokens([
        "big", "normal", "smile", "curly", "blonde", "light", "raised",
    ]),
    // Sleepy
    AvatarSelection::from_tokens([
        "sleepy", "normal", "neutral", "bald", "gray", "light", "normal",
    ]),
    // Funny
    AvatarSelection::from_tokens([
        "big", "button", "laugh", "curly", "pink", "light", "thick",
    ]),
    // Surprised
    AvatarSelection::from_tokens([
        "normal", "pointed", "surprised", "long", "red", "light", "raised",
    ]),
    // Neutral
    AvatarSelection::from_tokens([
        "normal", "normal", "neutral", "short", "brown", "light", "normal",
    ]),
];

/// Complete selection associated with `mood`.
pub fn preset_for(mood: MoodOption) -> AvatarSelection {
    PRESETS[mood as usize]
}

/// Preset lookup by name.  Unrecognised names fall back to `Neutral`.
pub fn preset_for_name(mood: &str) -> AvatarSelection {
    match mood.parse::<MoodOption>() {
        Ok(option) => preset_for(option),
        Err(_) => {
            tracing::debug!(mood, "unknown mood preset, using Neutral");
            preset_for(MoodOption::Neutral)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
