//! Declarative avatar layout.
//!
//! Describes the avatar as an ordered stack of layers with class tokens
//! (`head skin-light`, `mouth mouth-smile`, ...).  Nothing is drawn here;
//! any UI layer can reproduce the view from the layout, and a
//! [`CaptureBackend`](crate::capture::CaptureBackend) receives it as the
//! region to rasterise.

use serde::{Deserialize, Serialize};

use crate::catalog::FeatureCategory;
use crate::selection::AvatarSelection;

/// One visual layer of the avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Base class (e.g. `"eyes"`).
    pub class: String,
    /// Variant modifiers (e.g. `["eyes-wink"]`).
    pub modifiers: Vec<String>,
    /// Nested layers, drawn on top of this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Layer>,
}

impl Layer {
    fn new(class: &str, modifiers: Vec<String>) -> Self {
        Self {
            class: class.to_string(),
            modifiers,
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Layer>) -> Self {
        self.children = children;
        self
    }

    /// Space-separated class attribute, base class first.
    pub fn class_list(&self) -> String {
        std::iter::once(self.class.as_str())
            .chain(self.modifiers.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Full layer tree for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarLayout {
    /// Top-level layers in drawing order.
    pub layers: Vec<Layer>,
}

impl AvatarLayout {
    pub fn from_selection(selection: &AvatarSelection) -> Self {
        let eye = || {
            Layer::new("eye", Vec::new()).with_children(vec![Layer::new("pupil", Vec::new())])
        };
        let mut left = eye();
        left.modifiers.push("left-eye".into());
        let mut right = eye();
        right.modifiers.push("right-eye".into());

        let face = vec![
            Layer::new("eyebrows", vec![modifier("eyebrows", selection.eyebrows())]),
            Layer::new("eyes", vec![modifier("eyes", selection.eyes())])
                .with_children(vec![left, right]),
            Layer::new("nose", vec![modifier("nose", selection.nose())]),
            Layer::new("mouth", vec![modifier("mouth", selection.mouth())]),
        ];

        let hair = Layer::new(
            "hair",
            vec![
                modifier("hair", selection.hair_style()),
                modifier("hair-color", selection.hair_color()),
            ],
        );
        let head = Layer::new("head", vec![modifier("skin", selection.skin_color())])
            .with_children(face);

        Self {
            layers: vec![hair, head],
        }
    }

    /// Depth-first search for the first layer with base class `class`.
    pub fn find(&self, class: &str) -> Option<&Layer> {
        fn walk<'a>(layers: &'a [Layer], class: &str) -> Option<&'a Layer> {
            layers.iter().find_map(|l| {
                if l.class == class {
                    Some(l)
                } else {
                    walk(&l.children, class)
                }
            })
        }
        walk(&self.layers, class)
    }
}

fn modifier(prefix: &str, value: &str) -> String {
    format!("{}-{}", prefix, value)
}

/// Option label for a selection widget: first letter capitalised.
pub fn display_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field label for a selection widget: the category name upper-cased.
pub fn category_label(category: FeatureCategory) -> String {
    category.name().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{preset_for, MoodOption};

    #[test]
    fn test_layer_classes_follow_selection() {
        let layout = AvatarLayout::from_selection(&preset_for(MoodOption::Funny));
        assert_eq!(layout.find("head").unwrap().class_list(), "head skin-light");
        assert_eq!(layout.find("mouth").unwrap().class_list(), "mouth mouth-laugh");
        assert_eq!(layout.find("nose").unwrap().class_list(), "nose nose-button");
        assert_eq!(layout.find("eyebrows").unwrap().class_list(), "eyebrows eyebrows-thick");
        assert_eq!(
            layout.find("hair").unwrap().class_list(),
            "hair hair-curly hair-color-pink"
        );
    }

    #[test]
    fn test_eyes_have_two_pupils() {
        let layout = AvatarLayout::from_selection(&AvatarSelection::default());
        let eyes = layout.find("eyes").unwrap();
        assert_eq!(eyes.children.len(), 2);
        assert_eq!(eyes.children[0].class_list(), "eye left-eye");
        assert_eq!(eyes.children[1].class_list(), "eye right-eye");
        for eye in &eyes.children {
            assert_eq!(eye.children[0].class, "pupil");
        }
    }

    #[test]
    fn test_find_missing_layer() {
        let layout = AvatarLayout::from_selection(&AvatarSelection::default());
        assert!(layout.find("beard").is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(display_label("sleepy"), "Sleepy");
        assert_eq!(display_label(""), "");
        assert_eq!(category_label(FeatureCategory::HairStyle), "HAIRSTYLE");
    }
}
