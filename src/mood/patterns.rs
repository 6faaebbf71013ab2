//! Static mood patterns and scoring weights.

use super::Mood;

/// Score contributed by a matching mouth.
pub const MOUTH_WEIGHT: f64 = 0.5;
/// Score contributed by matching eyebrows.
pub const EYEBROWS_WEIGHT: f64 = 0.3;
/// Score contributed by matching eyes.
pub const EYES_WEIGHT: f64 = 0.2;

/// Feature values that indicate a mood, plus its display metadata.
#[derive(Debug, Clone, Copy)]
pub struct MoodPattern {
    pub mood: Mood,
    pub mouth: &'static [&'static str],
    pub eyebrows: &'static [&'static str],
    pub eyes: &'static [&'static str],
    pub emoji: &'static str,
    pub description: &'static str,
}

impl MoodPattern {
    /// Weighted match score of `(mouth, eyebrows, eyes)` against this pattern.
    ///
    /// Weights are added mouth, eyebrows, eyes in that order so the sums are
    /// reproducible bit for bit.
    pub fn score(&self, mouth: &str, eyebrows: &str, eyes: &str) -> f64 {
        let mut score = 0.0;
        if self.mouth.contains(&mouth) {
            score += MOUTH_WEIGHT;
        }
        if self.eyebrows.contains(&eyebrows) {
            score += EYEBROWS_WEIGHT;
        }
        if self.eyes.contains(&eyes) {
            score += EYES_WEIGHT;
        }
        score
    }
}

/// All 9 patterns in declaration order.  Index by `Mood as usize`.
///
/// Declaration order is the tie-break when two moods score the same.
pub static MOOD_PATTERNS: [MoodPattern; 9] = [
    MoodPattern {
        mood: Mood::Happy,
        mouth: &["smile", "laugh", "grin"],
        eyebrows: &["normal", "raised"],
        eyes: &["normal", "big", "wide"],
        emoji: "😊",
        description: "Cheerful and positive",
    },
    MoodPattern {
        mood: Mood::Sad,
        mouth: &["frown", "neutral"],
        eyebrows: &["normal", "thin"],
        eyes: &["small", "sleepy", "droopy"],
        emoji: "😢",
        description: "Melancholy or downcast",
    },
    MoodPattern {
        mood: Mood::Angry,
        mouth: &["frown", "neutral"],
        eyebrows: &["angry", "thick"],
        eyes: &["normal", "small"],
        emoji: "😠",
        description: "Frustrated or irritated",
    },
    MoodPattern {
        mood: Mood::Surprised,
        mouth: &["surprised", "open"],
        eyebrows: &["raised", "normal"],
        eyes: &["big", "wide"],
        emoji: "😲",
        description: "Shocked or amazed",
    },
    MoodPattern {
        mood: Mood::Playful,
        mouth: &["smirk", "kiss", "grin"],
        eyebrows: &["raised", "arched"],
        eyes: &["wink", "normal"],
        emoji: "😏",
        description: "Mischievous and fun-loving",
    },
    MoodPattern {
        mood: Mood::Sleepy,
        mouth: &["neutral", "small"],
        eyebrows: &["normal", "thin"],
        eyes: &["sleepy", "droopy", "small"],
        emoji: "😴",
        description: "Tired or drowsy",
    },
    MoodPattern {
        mood: Mood::Confident,
        mouth: &["smirk", "smile"],
        eyebrows: &["thick", "normal"],
        eyes: &["normal", "big"],
        emoji: "😎",
        description: "Self-assured and bold",
    },
    MoodPattern {
        mood: Mood::Romantic,
        mouth: &["kiss", "smile"],
        eyebrows: &["arched", "normal"],
        eyes: &["normal", "droopy"],
        emoji: "😘",
        description: "Loving and affectionate",
    },
    MoodPattern {
        mood: Mood::Neutral,
        mouth: &["neutral"],
        eyebrows: &["normal"],
        eyes: &["normal"],
        emoji: "😐",
        description: "Calm and composed",
    },
];
