//! Avatar errors.

use thiserror::Error;

use crate::catalog::FeatureCategory;

/// Errors that can occur while building or mutating avatar state.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// A value outside the category's catalog was supplied.
    #[error("Invalid value '{value}' for feature '{category}'")]
    InvalidFeatureValue {
        category: FeatureCategory,
        value: String,
    },

    /// Category name did not match any feature category.
    #[error("Unknown feature category: {0}")]
    UnknownCategory(String),

    /// Mood name did not match any known mood.
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Configuration validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The capture backend produced no image; details are in the log.
    #[error("Avatar capture failed")]
    CaptureFailed,

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
