//! Generator configuration loaded from YAML.
//!
//! ```yaml
//! initial:
//!   eyes: wink
//!   hairColor: pink
//! randomSeed: 42
//! capture:
//!   scale: 3.0
//!   useCors: false
//!   fileName: me.png
//! ```
//!
//! Every key is optional.  Keys are camelCase at every level, matching the
//! feature names under `initial`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::capture::DEFAULT_FILE_NAME;
use crate::error::AvatarError;
use crate::selection::PartialSelection;

/// Settings for an [`AvatarGenerator`](crate::generator::AvatarGenerator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Starting overlay; invalid values fall back to catalog defaults.
    pub initial: PartialSelection,
    /// Seed for reproducible randomisation.  `None` seeds from entropy.
    pub random_seed: Option<u64>,
    pub capture: CaptureSettings,
}

/// Capture parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptureSettings {
    pub scale: f32,
    pub use_cors: bool,
    pub file_name: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            scale: 2.0,
            use_cors: true,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, AvatarError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, AvatarError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), AvatarError> {
        if !(self.capture.scale.is_finite() && self.capture.scale > 0.0) {
            return Err(AvatarError::Config(format!(
                "capture.scale must be positive, got {}",
                self.capture.scale
            )));
        }
        if self.capture.file_name.trim().is_empty() {
            return Err(AvatarError::Config("capture.fileName must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GeneratorConfig::from_yaml("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.capture.file_name, "avatar.png");
        assert_eq!(config.capture.scale, 2.0);
        assert!(config.initial.is_empty());
    }

    #[test]
    fn test_full_document() {
        let yaml = r#"
initial:
  eyes: wink
  hairColor: pink
randomSeed: 42
capture:
  scale: 3.0
  useCors: false
  fileName: me.png
"#;
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.initial.eyes.as_deref(), Some("wink"));
        assert_eq!(config.initial.hair_color.as_deref(), Some("pink"));
        assert_eq!(config.random_seed, Some(42));
        assert_eq!(config.capture.scale, 3.0);
        assert!(!config.capture.use_cors);
        assert_eq!(config.capture.file_name, "me.png");
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let err = GeneratorConfig::from_yaml("capture:\n  scale: 0\n").unwrap_err();
        assert!(matches!(err, AvatarError::Config(_)));
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let err = GeneratorConfig::from_yaml("capture:\n  fileName: \"  \"\n").unwrap_err();
        assert!(matches!(err, AvatarError::Config(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = GeneratorConfig::from_yaml("randomSeed: [not, a, number]").unwrap_err();
        assert!(matches!(err, AvatarError::Yaml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "randomSeed: 7").unwrap();
        let config = GeneratorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn test_keys_are_camel_case() {
        let config = GeneratorConfig {
            random_seed: Some(1),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("randomSeed: 1"));
        assert!(yaml.contains("useCors: true"));
        assert!(yaml.contains("fileName: avatar.png"));

        // snake_case keys are not aliases; unknown keys are ignored.
        let config = GeneratorConfig::from_yaml("random_seed: 9\n").unwrap();
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_missing_file() {
        let err = GeneratorConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, AvatarError::Io(_)));
    }
}
