//! Mood analysis — weighted scoring of facial features against mood patterns.
//!
//! Only mouth, eyebrows, and eyes participate.  Each of the 9 patterns is
//! scored `0.5·mouth + 0.3·eyebrows + 0.2·eyes`; the best score becomes the
//! primary mood and a close runner-up becomes the secondary mood.
//!
//! # Example
//!
//! ```
//! use avatar_mood::mood::{analyze, Mood};
//!
//! let analysis = analyze("laugh", "raised", "big");
//! assert_eq!(analysis.primary.mood, Mood::Happy);
//! assert_eq!(analysis.primary.confidence, 1.0);
//! assert_eq!(analysis.traits, vec!["joyful", "alert", "curious"]);
//! ```

pub mod analyzer;
pub mod patterns;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AvatarError;

pub use analyzer::{analyze, analyze_selection, MoodAnalysis, MoodDetection};
pub use patterns::{MoodPattern, EYEBROWS_WEIGHT, EYES_WEIGHT, MOOD_PATTERNS, MOUTH_WEIGHT};

/// The 9 moods recognised by the analyzer, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Surprised,
    Playful,
    Sleepy,
    Confident,
    Romantic,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Surprised,
        Self::Playful,
        Self::Sleepy,
        Self::Confident,
        Self::Romantic,
        Self::Neutral,
    ];

    /// Lowercase mood name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Surprised => "surprised",
            Self::Playful => "playful",
            Self::Sleepy => "sleepy",
            Self::Confident => "confident",
            Self::Romantic => "romantic",
            Self::Neutral => "neutral",
        }
    }

    /// Name with the first letter capitalised, for headings.
    pub fn display_name(&self) -> String {
        crate::render::display_label(self.name())
    }

    pub fn pattern(&self) -> &'static MoodPattern {
        &MOOD_PATTERNS[*self as usize]
    }

    pub fn emoji(&self) -> &'static str {
        self.pattern().emoji
    }

    pub fn description(&self) -> &'static str {
        self.pattern().description
    }

    /// Indicator color as a `#RRGGBB` code.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Happy => "#FFD700",
            Self::Sad => "#6495ED",
            Self::Angry => "#FF6B6B",
            Self::Surprised => "#FF8C00",
            Self::Playful => "#FF69B4",
            Self::Sleepy => "#DDA0DD",
            Self::Confident => "#32CD32",
            Self::Romantic => "#FF1493",
            Self::Neutral => "#D3D3D3",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| AvatarError::UnknownMood(s.to_string()))
    }
}

/// Indicator color for a mood name; unknown names get the neutral color.
pub fn color_for_mood(mood: &str) -> &'static str {
    mood.parse::<Mood>().unwrap_or(Mood::Neutral).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup() {
        assert_eq!(color_for_mood("happy"), "#FFD700");
        assert_eq!(color_for_mood("romantic"), "#FF1493");
    }

    #[test]
    fn test_unknown_color_is_neutral() {
        assert_eq!(color_for_mood("Bogus"), Mood::Neutral.color());
        assert_eq!(color_for_mood(""), "#D3D3D3");
    }

    #[test]
    fn test_names_roundtrip() {
        for mood in Mood::ALL {
            assert_eq!(mood.name().parse::<Mood>().unwrap(), mood);
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.name()));
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Mood::Confident.display_name(), "Confident");
        assert_eq!(Mood::Sad.emoji(), "😢");
        assert_eq!(Mood::Neutral.description(), "Calm and composed");
    }
}
