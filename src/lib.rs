//! # avatar-mood
//!
//! Compose a cartoon avatar from discrete facial features, randomize it,
//! drive it from a mood picker, and infer how it looks like it feels.
//!
//! Two independent classifiers read the same selection:
//!
//! - [`expression::classify`] — an ordered, first-match-wins rule table
//!   producing one of 8 expression labels.
//! - [`mood::analyze`] — a weighted scorer over mouth, eyebrows, and eyes
//!   producing a primary mood, an optional near-tie secondary mood, and
//!   trait tags.
//!
//! They disagree on purpose (different label sets, different inputs) and are
//! never merged.
//!
//! ```
//! use avatar_mood::{AvatarGenerator, ExpressionLabel, MoodOption};
//!
//! let mut gen = AvatarGenerator::default();
//! gen.apply_mood(MoodOption::Excited);
//! assert_eq!(gen.expression(), ExpressionLabel::Excited);
//! ```

pub mod capture;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod expression;
pub mod generator;
pub mod mood;
pub mod preset;
pub mod render;
pub mod selection;

// Re-exports
pub use capture::{
    capture_avatar, CaptureBackend, CaptureError, CaptureRequest, CapturedImage, RasterBackend,
};
pub use catalog::FeatureCategory;
pub use config::GeneratorConfig;
pub use error::AvatarError;
pub use expression::{classify, ExpressionLabel};
pub use generator::{AvatarGenerator, AvatarSnapshot};
pub use mood::{analyze, color_for_mood, Mood, MoodAnalysis, MoodDetection};
pub use preset::{preset_for, preset_for_name, MoodOption};
pub use render::AvatarLayout;
pub use selection::{AvatarSelection, PartialSelection, RandomSource, RngSource};
