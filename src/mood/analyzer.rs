//! Weighted mood scorer.

use serde::Serialize;

use super::{Mood, MOOD_PATTERNS};
use crate::selection::AvatarSelection;

/// Minimum score a runner-up needs before it can be reported.
const SECONDARY_MIN_SCORE: f64 = 0.3;
/// Maximum gap between primary and runner-up for a near-tie.
const NEAR_TIE_BAND: f64 = 0.3;

/// One detected mood with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodDetection {
    pub mood: Mood,
    /// Match score in `[0, 1]`.
    pub confidence: f64,
    pub description: &'static str,
    pub emoji: &'static str,
}

impl MoodDetection {
    fn new(mood: Mood, score: f64) -> Self {
        Self {
            mood,
            confidence: score.min(1.0),
            description: mood.description(),
            emoji: mood.emoji(),
        }
    }

    /// Confidence as a rounded percentage.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodAnalysis {
    pub primary: MoodDetection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<MoodDetection>,
    /// Trait tags in evaluation order.
    pub traits: Vec<&'static str>,
}

/// Score `(mouth, eyebrows, eyes)` against every mood pattern.
pub fn analyze(mouth: &str, eyebrows: &str, eyes: &str) -> MoodAnalysis {
    let mut ranked: Vec<(Mood, f64)> = MOOD_PATTERNS
        .iter()
        .map(|p| (p.mood, p.score(mouth, eyebrows, eyes)))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    // Stable: equal scores keep declaration order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let (primary_mood, primary_score) = ranked.first().copied().unwrap_or((Mood::Neutral, 0.0));

    let secondary = ranked
        .get(1)
        .filter(|(_, score)| {
            *score > SECONDARY_MIN_SCORE && (primary_score - *score).abs() < NEAR_TIE_BAND
        })
        .map(|(mood, score)| MoodDetection::new(*mood, *score));

    MoodAnalysis {
        primary: MoodDetection::new(primary_mood, primary_score),
        secondary,
        traits: traits(mouth, eyebrows, eyes),
    }
}

/// [`analyze`] over the relevant features of a selection.
pub fn analyze_selection(selection: &AvatarSelection) -> MoodAnalysis {
    analyze(selection.mouth(), selection.eyebrows(), selection.eyes())
}

fn traits(mouth: &str, eyebrows: &str, eyes: &str) -> Vec<&'static str> {
    let mut traits = Vec::new();
    if eyes == "wink" {
        traits.push("flirtatious");
    }
    if eyebrows == "thick" {
        traits.push("expressive");
    }
    if mouth == "laugh" {
        traits.push("joyful");
    }
    if eyes == "big" {
        traits.push("alert");
    }
    if eyebrows == "raised" {
        traits.push("curious");
    }
    traits
}

// ============================================================================
// Tests
// ============================================================================
