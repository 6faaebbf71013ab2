//! Feature catalog — the closed set of values each facial feature may take.
//!
//! Every token in the catalog is lowercase and doubles as the display class
//! suffix used by [`crate::render`].  The first entry of each list is the
//! category default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AvatarError;

// ============================================================================
// Feature categories
// ============================================================================

/// The 7 customizable facial features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureCategory {
    Eyes,
    Nose,
    Mouth,
    HairStyle,
    HairColor,
    SkinColor,
    Eyebrows,
}

impl FeatureCategory {
    /// All 7 categories in canonical order.
    pub const ALL: [FeatureCategory; 7] = [
        Self::Eyes,
        Self::Nose,
        Self::Mouth,
        Self::HairStyle,
        Self::HairColor,
        Self::SkinColor,
        Self::Eyebrows,
    ];

    /// Wire name of the category (camelCase, matching the serde form).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eyes => "eyes",
            Self::Nose => "nose",
            Self::Mouth => "mouth",
            Self::HairStyle => "hairStyle",
            Self::HairColor => "hairColor",
            Self::SkinColor => "skinColor",
            Self::Eyebrows => "eyebrows",
        }
    }

    /// Allowed values for this category.
    pub fn values(&self) -> &'static [&'static str] {
        allowed_values(*self)
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureCategory {
    type Err = AvatarError;

    /// Accepts the camelCase wire name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eyes" => Ok(Self::Eyes),
            "nose" => Ok(Self::Nose),
            "mouth" => Ok(Self::Mouth),
            "hairStyle" | "hair_style" => Ok(Self::HairStyle),
            "hairColor" | "hair_color" => Ok(Self::HairColor),
            "skinColor" | "skin_color" => Ok(Self::SkinColor),
            "eyebrows" => Ok(Self::Eyebrows),
            other => Err(AvatarError::UnknownCategory(other.to_string())),
        }
    }
}

// ============================================================================
// Catalog tables
// ============================================================================

pub const EYES: &[&str] = &["normal", "big", "small", "sleepy", "wink", "wide", "droopy"];
pub const NOSE: &[&str] = &["normal", "button", "pointed", "wide"];
pub const MOUTH: &[&str] = &[
    "smile", "frown", "neutral", "laugh", "surprised", "kiss", "grin", "smirk", "open", "small",
];
pub const HAIR_STYLE: &[&str] = &["short", "long", "curly", "spiky", "bald"];
pub const HAIR_COLOR: &[&str] = &["brown", "black", "blonde", "red", "gray", "pink"];
pub const SKIN_COLOR: &[&str] = &["light", "fair", "medium", "tan", "dark"];
pub const EYEBROWS: &[&str] = &["normal", "raised", "angry", "thin", "thick", "arched"];

/// Ordered, non-empty list of allowed values for a category.
pub fn allowed_values(category: FeatureCategory) -> &'static [&'static str] {
    match category {
        FeatureCategory::Eyes => EYES,
        FeatureCategory::Nose => NOSE,
        FeatureCategory::Mouth => MOUTH,
        FeatureCategory::HairStyle => HAIR_STYLE,
        FeatureCategory::HairColor => HAIR_COLOR,
        FeatureCategory::SkinColor => SKIN_COLOR,
        FeatureCategory::Eyebrows => EYEBROWS,
    }
}

/// Default value for a category (its first catalog entry).
pub fn default_value(category: FeatureCategory) -> &'static str {
    allowed_values(category)[0]
}

/// Look up the canonical static token for `value`, if it is in the catalog.
pub fn lookup(category: FeatureCategory, value: &str) -> Option<&'static str> {
    allowed_values(category).iter().copied().find(|v| *v == value)
}

/// Whether `value` is a member of the category's catalog.
pub fn contains(category: FeatureCategory, value: &str) -> bool {
    lookup(category, value).is_some()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_non_empty() {
        for category in FeatureCategory::ALL {
            assert!(!allowed_values(category).is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn test_tokens_are_lowercase_and_unique() {
        for category in FeatureCategory::ALL {
            let mut seen = std::collections::HashSet::new();
            for value in allowed_values(category) {
                assert!(
                    value.chars().all(|c| c.is_ascii_lowercase()),
                    "{}.{} is not a lowercase token",
                    category,
                    value
                );
                assert!(seen.insert(*value), "{} has duplicate '{}'", category, value);
            }
        }
    }

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(default_value(FeatureCategory::Eyes), "normal");
        assert_eq!(default_value(FeatureCategory::Mouth), "smile");
        assert_eq!(default_value(FeatureCategory::HairStyle), "short");
        assert_eq!(default_value(FeatureCategory::HairColor), "brown");
        assert_eq!(default_value(FeatureCategory::SkinColor), "light");
    }

    #[test]
    fn test_category_name_roundtrip() {
        for category in FeatureCategory::ALL {
            assert_eq!(category.name().parse::<FeatureCategory>().unwrap(), category);
        }
        assert_eq!(
            "hair_color".parse::<FeatureCategory>().unwrap(),
            FeatureCategory::HairColor
        );
        assert!(matches!(
            "beard".parse::<FeatureCategory>(),
            Err(AvatarError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&FeatureCategory::SkinColor).unwrap();
        assert_eq!(json, "\"skinColor\"");
    }

    #[test]
    fn test_contains() {
        assert!(contains(FeatureCategory::Eyes, "wink"));
        assert!(!contains(FeatureCategory::Eyes, "Wink"));
        assert!(!contains(FeatureCategory::Nose, "smile"));
    }
}
