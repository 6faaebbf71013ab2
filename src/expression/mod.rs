//! Rule-based expression classifier.
//!
//! An ordered list of rules is evaluated top to bottom and the first rule
//! whose condition holds wins.  Order matters: `{smile, big, raised}` also
//! satisfies the mouth half of the Happy rule but is listed under Excited
//! first.  When nothing matches the label is [`ExpressionLabel::Neutral`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::FeatureCategory;
use crate::selection::AvatarSelection;

// ============================================================================
// Labels
// ============================================================================

/// The closed set of expression labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionLabel {
    Excited,
    Happy,
    Angry,
    Sleepy,
    Sad,
    Funny,
    Surprised,
    Neutral,
}

impl ExpressionLabel {
    pub const ALL: [ExpressionLabel; 8] = [
        Self::Excited,
        Self::Happy,
        Self::Angry,
        Self::Sleepy,
        Self::Sad,
        Self::Funny,
        Self::Surprised,
        Self::Neutral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Excited => "Excited",
            Self::Happy => "Happy",
            Self::Angry => "Angry",
            Self::Sleepy => "Sleepy",
            Self::Sad => "Sad",
            Self::Funny => "Funny",
            Self::Surprised => "Surprised",
            Self::Neutral => "Neutral",
        }
    }

    /// Emoji shown next to the label.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Excited => "😄",
            Self::Happy => "😊",
            Self::Angry => "😠",
            Self::Sleepy => "😴",
            Self::Sad => "😢",
            Self::Funny => "😂",
            Self::Surprised => "😲",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for ExpressionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Rules
// ============================================================================

/// A single `category = value` requirement.
pub type FeatureMatch = (FeatureCategory, &'static str);

/// Condition attached to a rule.
#[derive(Debug, Clone, Copy)]
pub enum RuleCondition {
    /// Every pair must match.
    AllOf(&'static [FeatureMatch]),
    /// At least one group must match in full.
    AnyOf(&'static [&'static [FeatureMatch]]),
}

impl RuleCondition {
    pub fn matches(&self, selection: &AvatarSelection) -> bool {
        match self {
            Self::AllOf(pairs) => all_match(pairs, selection),
            Self::AnyOf(groups) => groups.iter().any(|g| all_match(g, selection)),
        }
    }
}

fn all_match(pairs: &[FeatureMatch], selection: &AvatarSelection) -> bool {
    pairs
        .iter()
        .all(|(category, value)| selection.get(*category) == *value)
}

/// An expression label guarded by a condition.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionRule {
    pub label: ExpressionLabel,
    pub condition: RuleCondition,
}

use FeatureCategory::{Eyebrows, Eyes, Mouth};

/// Canonical rule order.
pub static EXPRESSION_RULES: [ExpressionRule; 7] = [
    ExpressionRule {
        label: ExpressionLabel::Excited,
        condition: RuleCondition::AllOf(&[(Mouth, "smile"), (Eyes, "big"), (Eyebrows, "raised")]),
    },
    ExpressionRule {
        label: ExpressionLabel::Happy,
        condition: RuleCondition::AllOf(&[(Mouth, "smile"), (Eyes, "normal")]),
    },
    ExpressionRule {
        label: ExpressionLabel::Angry,
        condition: RuleCondition::AnyOf(&[&[(Mouth, "frown")], &[(Eyebrows, "angry")]]),
    },
    ExpressionRule {
        label: ExpressionLabel::Sleepy,
        condition: RuleCondition::AllOf(&[(Mouth, "neutral"), (Eyes, "sleepy")]),
    },
    ExpressionRule {
        label: ExpressionLabel::Sad,
        condition: RuleCondition::AllOf(&[(Mouth, "frown"), (Eyes, "small")]),
    },
    ExpressionRule {
        label: ExpressionLabel::Funny,
        condition: RuleCondition::AllOf(&[(Mouth, "laugh")]),
    },
    ExpressionRule {
        label: ExpressionLabel::Surprised,
        condition: RuleCondition::AllOf(&[(Mouth, "surprised")]),
    },
];

/// Classify a selection against [`EXPRESSION_RULES`], first match wins.
pub fn classify(selection: &AvatarSelection) -> ExpressionLabel {
    classify_with(&EXPRESSION_RULES, selection)
}

/// Classify against an arbitrary ordered rule list.
pub fn classify_with(rules: &[ExpressionRule], selection: &AvatarSelection) -> ExpressionLabel {
    rules
        .iter()
        .find(|rule| rule.condition.matches(selection))
        .map(|rule| rule.label)
        .unwrap_or(ExpressionLabel::Neutral)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn face(mouth: &str, eyebrows: &str, eyes: &str) -> AvatarSelection {
        AvatarSelection::default()
            .update(Mouth, mouth)
            .and_then(|s| s.update(Eyebrows, eyebrows))
            .and_then(|s| s.update(Eyes, eyes))
            .unwrap()
    }

    #[test]
    fn test_excited_beats_happy() {
        assert_eq!(classify(&face("smile", "raised", "big")), ExpressionLabel::Excited);
    }

    #[test]
    fn test_happy() {
        assert_eq!(classify(&face("smile", "normal", "normal")), ExpressionLabel::Happy);
        // Smile with big eyes but flat brows is neither Excited nor Happy.
        assert_eq!(classify(&face("smile", "normal", "big")), ExpressionLabel::Neutral);
    }

    #[test]
    fn test_angry_or_semantics() {
        assert_eq!(classify(&face("frown", "normal", "normal")), ExpressionLabel::Angry);
        assert_eq!(classify(&face("neutral", "angry", "normal")), ExpressionLabel::Angry);
    }

    #[test]
    fn test_angry_shadows_sad() {
        // frown + small eyes satisfies Sad, but Angry is listed first.
        assert_eq!(classify(&face("frown", "thin", "small")), ExpressionLabel::Angry);
    }

    #[test]
    fn test_sad_is_unreachable_with_canonical_rules() {
        // Every Sad selection frowns, which the Angry rule already claims.
        let sad_only = [EXPRESSION_RULES[4]];
        let sel = face("frown", "thin", "small");
        assert_eq!(classify_with(&sad_only, &sel), ExpressionLabel::Sad);
    }

    #[test]
    fn test_sleepy_funny_surprised() {
        assert_eq!(classify(&face("neutral", "normal", "sleepy")), ExpressionLabel::Sleepy);
        assert_eq!(classify(&face("laugh", "thick", "wink")), ExpressionLabel::Funny);
        assert_eq!(classify(&face("surprised", "raised", "wide")), ExpressionLabel::Surprised);
    }

    #[test]
    fn test_angry_brows_override_later_rules() {
        assert_eq!(classify(&face("laugh", "angry", "big")), ExpressionLabel::Angry);
    }

    #[test]
    fn test_fallback_neutral() {
        assert_eq!(classify(&face("kiss", "thin", "wink")), ExpressionLabel::Neutral);
    }

    #[test]
    fn test_hair_and_skin_never_matter() {
        let base = face("smile", "normal", "normal");
        let styled = base
            .update(FeatureCategory::HairStyle, "bald")
            .and_then(|s| s.update(FeatureCategory::SkinColor, "dark"))
            .and_then(|s| s.update(FeatureCategory::Nose, "pointed"))
            .unwrap();
        assert_eq!(classify(&base), classify(&styled));
    }

    #[test]
    fn test_total_over_catalog() {
        let mut labels = std::collections::HashSet::new();
        for mouth in catalog::MOUTH {
            for eyebrows in catalog::EYEBROWS {
                for eyes in catalog::EYES {
                    let label = classify(&face(mouth, eyebrows, eyes));
                    assert!(ExpressionLabel::ALL.contains(&label));
                    labels.insert(label);
                }
            }
        }
        // Sad is shadowed by Angry; every other label is reachable.
        assert_eq!(labels.len(), 7);
        assert!(!labels.contains(&ExpressionLabel::Sad));
    }

    #[test]
    fn test_emoji_map() {
        assert_eq!(ExpressionLabel::Funny.emoji(), "😂");
        assert_eq!(ExpressionLabel::Neutral.to_string(), "Neutral");
    }
}
