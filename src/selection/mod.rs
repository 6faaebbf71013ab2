//! Avatar selection state — one concrete catalog value per feature category.
//!
//! An [`AvatarSelection`] is always total and valid: every construction path
//! either validates its input or substitutes the category default.  All
//! mutations return a new value; nothing is updated in place.

pub mod random;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::{self, FeatureCategory};
use crate::error::AvatarError;
use crate::preset;

pub use random::{RandomSource, RngSource};

// ============================================================================
// Partial selection (overlay input)
// ============================================================================

/// An optional value per category, used to seed a selection.
///
/// Values are unchecked; [`AvatarSelection::create`] drops the ones that are
/// not in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrows: Option<String>,
}

impl PartialSelection {
    /// Value supplied for `category`, if any.
    pub fn get(&self, category: FeatureCategory) -> Option<&str> {
        let slot = match category {
            FeatureCategory::Eyes => &self.eyes,
            FeatureCategory::Nose => &self.nose,
            FeatureCategory::Mouth => &self.mouth,
            FeatureCategory::HairStyle => &self.hair_style,
            FeatureCategory::HairColor => &self.hair_color,
            FeatureCategory::SkinColor => &self.skin_color,
            FeatureCategory::Eyebrows => &self.eyebrows,
        };
        slot.as_deref()
    }

    /// Builder-style setter.
    pub fn with(mut self, category: FeatureCategory, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match category {
            FeatureCategory::Eyes => self.eyes = value,
            FeatureCategory::Nose => self.nose = value,
            FeatureCategory::Mouth => self.mouth = value,
            FeatureCategory::HairStyle => self.hair_style = value,
            FeatureCategory::HairColor => self.hair_color = value,
            FeatureCategory::SkinColor => self.skin_color = value,
            FeatureCategory::Eyebrows => self.eyebrows = value,
        }
        self
    }

    /// True if no category has a value.
    pub fn is_empty(&self) -> bool {
        FeatureCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

// ============================================================================
// Avatar selection
// ============================================================================

/// A complete, valid choice of one value per feature category.
///
/// Values are indexed by `FeatureCategory as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "PartialSelection")]
pub struct AvatarSelection {
    values: [&'static str; 7],
}

impl AvatarSelection {
    /// Build from raw catalog tokens.  Callers guarantee validity.
    pub(crate) const fn from_tokens(values: [&'static str; 7]) -> Self {
        Self { values }
    }

    /// Defaults for every category, overlaid with the valid entries of
    /// `initial`.  Invalid entries are dropped in favour of the default.
    pub fn create(initial: Option<&PartialSelection>) -> Self {
        let mut values = [""; 7];
        for category in FeatureCategory::ALL {
            let default = catalog::default_value(category);
            values[category as usize] = match initial.and_then(|p| p.get(category)) {
                Some(requested) => catalog::lookup(category, requested).unwrap_or_else(|| {
                    tracing::debug!(
                        %category,
                        value = requested,
                        "dropping invalid overlay value, using default '{}'",
                        default
                    );
                    default
                }),
                None => default,
            };
        }
        Self { values }
    }

    /// Value currently selected for `category`.
    pub fn get(&self, category: FeatureCategory) -> &'static str {
        self.values[category as usize]
    }

    pub fn eyes(&self) -> &'static str {
        self.get(FeatureCategory::Eyes)
    }

    pub fn nose(&self) -> &'static str {
        self.get(FeatureCategory::Nose)
    }

    pub fn mouth(&self) -> &'static str {
        self.get(FeatureCategory::Mouth)
    }

    pub fn hair_style(&self) -> &'static str {
        self.get(FeatureCategory::HairStyle)
    }

    pub fn hair_color(&self) -> &'static str {
        self.get(FeatureCategory::HairColor)
    }

    pub fn skin_color(&self) -> &'static str {
        self.get(FeatureCategory::SkinColor)
    }

    pub fn eyebrows(&self) -> &'static str {
        self.get(FeatureCategory::Eyebrows)
    }

    /// `(category, value)` pairs in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureCategory, &'static str)> + '_ {
        FeatureCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// A copy with `category` set to `value`.
    ///
    /// Fails with [`AvatarError::InvalidFeatureValue`] when `value` is not in
    /// the category's catalog.
    pub fn update(&self, category: FeatureCategory, value: &str) -> Result<Self, AvatarError> {
        let token = catalog::lookup(category, value).ok_or_else(|| {
            AvatarError::InvalidFeatureValue {
                category,
                value: value.to_string(),
            }
        })?;
        let mut next = *self;
        next.values[category as usize] = token;
        Ok(next)
    }

    /// Lenient form of [`update`](Self::update): an invalid value resets the
    /// category to its default instead of failing.
    pub fn with_value(&self, category: FeatureCategory, value: &str) -> Self {
        self.update(category, value).unwrap_or_else(|_| {
            tracing::debug!(%category, value, "invalid value, resetting category to default");
            let mut next = *self;
            next.values[category as usize] = catalog::default_value(category);
            next
        })
    }

    /// A fresh selection with one uniform draw per category.
    pub fn randomize(rng: &mut dyn RandomSource) -> Self {
        let mut values = [""; 7];
        for category in FeatureCategory::ALL {
            values[category as usize] = random::pick(rng, catalog::allowed_values(category));
        }
        Self { values }
    }

    /// The preset selection for `mood`; unknown names yield the neutral preset.
    pub fn apply_mood_preset(&self, mood: &str) -> Self {
        preset::preset_for_name(mood)
    }

    /// Convert back into an overlay with every category filled in.
    pub fn to_partial(&self) -> PartialSelection {
        self.iter()
            .fold(PartialSelection::default(), |p, (c, v)| p.with(c, v))
    }
}

impl Default for AvatarSelection {
    fn default() -> Self {
        Self::create(None)
    }
}

impl From<PartialSelection> for AvatarSelection {
    fn from(partial: PartialSelection) -> Self {
        Self::create(Some(&partial))
    }
}

impl Serialize for AvatarSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AvatarSelection", 7)?;
        for (category, value) in self.iter() {
            state.serialize_field(category.name(), value)?;
        }
        state.end()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::random::tests::SequenceSource;

    #[test]
    fn test_default_is_first_catalog_entry() {
        let sel = AvatarSelection::default();
        for (category, value) in sel.iter() {
            assert_eq!(value, catalog::default_value(category));
        }
    }

    #[test]
    fn test_create_overlays_valid_and_drops_invalid() {
        let initial = PartialSelection::default()
            .with(FeatureCategory::Eyes, "wink")
            .with(FeatureCategory::Mouth, "scream")
            .with(FeatureCategory::HairColor, "pink");
        let sel = AvatarSelection::create(Some(&initial));
        assert_eq!(sel.eyes(), "wink");
        assert_eq!(sel.mouth(), "smile"); // invalid dropped
        assert_eq!(sel.hair_color(), "pink");
        assert_eq!(sel.nose(), "normal");
    }

    #[test]
    fn test_update_valid_value() {
        let sel = AvatarSelection::default();
        let next = sel.update(FeatureCategory::Eyebrows, "angry").unwrap();
        assert_eq!(next.eyebrows(), "angry");
        // Original untouched
        assert_eq!(sel.eyebrows(), "normal");
        // Only the one field differs
        for category in FeatureCategory::ALL {
            if category != FeatureCategory::Eyebrows {
                assert_eq!(sel.get(category), next.get(category));
            }
        }
    }

    #[test]
    fn test_update_invalid_value_fails() {
        let sel = AvatarSelection::default();
        let err = sel.update(FeatureCategory::Nose, "smile").unwrap_err();
        match err {
            AvatarError::InvalidFeatureValue { category, value } => {
                assert_eq!(category, FeatureCategory::Nose);
                assert_eq!(value, "smile");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_value_resets_invalid_to_default() {
        let sel = AvatarSelection::default()
            .update(FeatureCategory::HairStyle, "bald")
            .unwrap();
        let next = sel.with_value(FeatureCategory::HairStyle, "mohawk");
        assert_eq!(next.hair_style(), "short");
    }

    #[test]
    fn test_randomize_uses_source() {
        // 0.0 always picks the first entry
        let mut zeros = SequenceSource::new(vec![0.0]);
        assert_eq!(AvatarSelection::randomize(&mut zeros), AvatarSelection::default());

        // Just below 1.0 always picks the last entry
        let mut highs = SequenceSource::new(vec![0.999_999]);
        let sel = AvatarSelection::randomize(&mut highs);
        for (category, value) in sel.iter() {
            assert_eq!(value, *catalog::allowed_values(category).last().unwrap());
        }
    }

    #[test]
    fn test_randomize_covers_every_value() {
        use rand::SeedableRng;
        let mut rng = RngSource(rand::rngs::StdRng::seed_from_u64(7));
        let mut seen: std::collections::HashSet<(FeatureCategory, &str)> =
            std::collections::HashSet::new();
        for _ in 0..10_000 {
            let sel = AvatarSelection::randomize(&mut rng);
            seen.extend(sel.iter());
        }
        for category in FeatureCategory::ALL {
            for value in catalog::allowed_values(category) {
                assert!(seen.contains(&(category, *value)), "{}.{} never drawn", category, value);
            }
        }
    }

    #[test]
    fn test_apply_mood_preset_unknown_falls_back() {
        let sel = AvatarSelection::default();
        assert_eq!(sel.apply_mood_preset("Bogus"), sel.apply_mood_preset("Neutral"));
        assert_eq!(sel.apply_mood_preset("Sleepy").eyes(), "sleepy");
    }

    #[test]
    fn test_serde_roundtrip_uses_camel_case_keys() {
        let sel = AvatarSelection::default()
            .update(FeatureCategory::SkinColor, "tan")
            .unwrap();
        let json = serde_json::to_value(sel).unwrap();
        assert_eq!(json["skinColor"], "tan");
        assert_eq!(json["hairStyle"], "short");
        let back: AvatarSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back, sel);
    }

    #[test]
    fn test_deserialize_drops_invalid_values() {
        let sel: AvatarSelection =
            serde_json::from_str(r#"{"eyes": "laser", "mouth": "laugh"}"#).unwrap();
        assert_eq!(sel.eyes(), "normal");
        assert_eq!(sel.mouth(), "laugh");
    }

    #[test]
    fn test_to_partial_roundtrips_through_create() {
        let sel = AvatarSelection::default()
            .update(FeatureCategory::Mouth, "kiss")
            .unwrap();
        let partial = sel.to_partial();
        assert!(!partial.is_empty());
        assert_eq!(AvatarSelection::create(Some(&partial)), sel);
    }
}
