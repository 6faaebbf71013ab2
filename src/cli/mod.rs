//! Command-line commands for the `avatar` binary.
//!
//! Each command produces a JSON value; the binary only prints it.

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::capture::RasterBackend;
use crate::catalog::{self, FeatureCategory};
use crate::config::GeneratorConfig;
use crate::error::AvatarError;
use crate::expression::classify;
use crate::generator::AvatarGenerator;
use crate::mood::{analyze, color_for_mood};
use crate::render::{category_label, display_label};
use crate::selection::AvatarSelection;

/// Usage text printed for unknown commands.
pub const USAGE: &str = "\
usage: avatar <command>

commands:
  default                              default avatar snapshot
  random [seed]                        random avatar snapshot
  preset <mood>                        snapshot of a mood preset
  analyze <mouth> <eyebrows> <eyes>    weighted mood analysis
  classify <mouth> <eyebrows> <eyes>   rule-based expression label
  catalog                              allowed values per feature
  capture [dir | --data-url]           render the configured avatar to PNG";

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Default,
    Random { seed: Option<u64> },
    Preset { mood: String },
    Analyze { mouth: String, eyebrows: String, eyes: String },
    Classify { mouth: String, eyebrows: String, eyes: String },
    Catalog,
    Capture { target: CaptureTarget },
}

/// Where `capture` puts the PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureTarget {
    /// Write `<file_name>` into this directory.
    Dir(PathBuf),
    /// Print a `data:` URL instead of touching the filesystem.
    DataUrl,
}

/// Parse a CLI command from its arguments (program name excluded).
pub fn parse_command(args: &[String]) -> Option<CliCommand> {
    let (cmd, rest) = args.split_first()?;
    match (cmd.as_str(), rest) {
        ("default", []) => Some(CliCommand::Default),
        ("random", []) => Some(CliCommand::Random { seed: None }),
        ("random", [seed]) => seed.parse().ok().map(|s| CliCommand::Random { seed: Some(s) }),
        ("preset", [mood]) => Some(CliCommand::Preset { mood: mood.clone() }),
        ("analyze", [m, b, e]) => Some(CliCommand::Analyze {
            mouth: m.clone(),
            eyebrows: b.clone(),
            eyes: e.clone(),
        }),
        ("classify", [m, b, e]) => Some(CliCommand::Classify {
            mouth: m.clone(),
            eyebrows: b.clone(),
            eyes: e.clone(),
        }),
        ("catalog", []) => Some(CliCommand::Catalog),
        ("capture", []) => Some(CliCommand::Capture {
            target: CaptureTarget::Dir(PathBuf::from(".")),
        }),
        ("capture", [flag]) if flag == "--data-url" => Some(CliCommand::Capture {
            target: CaptureTarget::DataUrl,
        }),
        ("capture", [dir]) => Some(CliCommand::Capture {
            target: CaptureTarget::Dir(PathBuf::from(dir)),
        }),
        _ => None,
    }
}

/// Execute `command` against a session built from `config`.
pub async fn run_command(
    command: &CliCommand,
    config: GeneratorConfig,
) -> Result<Value, AvatarError> {
    let value = match command {
        CliCommand::Default => json!(AvatarGenerator::new(config).snapshot()),
        CliCommand::Random { seed } => {
            let mut gen = AvatarGenerator::new(GeneratorConfig {
                random_seed: seed.or(config.random_seed),
                ..config
            });
            gen.randomize();
            json!(gen.snapshot())
        }
        CliCommand::Preset { mood } => {
            let mut gen = AvatarGenerator::new(config);
            gen.apply_mood_name(mood);
            json!(gen.snapshot())
        }
        CliCommand::Analyze { mouth, eyebrows, eyes } => {
            let analysis = analyze(mouth, eyebrows, eyes);
            let color = color_for_mood(analysis.primary.mood.name());
            json!({ "analysis": analysis, "color": color })
        }
        CliCommand::Classify { mouth, eyebrows, eyes } => {
            // Strict here: a typo should be reported, not silently defaulted.
            let selection = AvatarSelection::default()
                .update(FeatureCategory::Mouth, mouth)?
                .update(FeatureCategory::Eyebrows, eyebrows)?
                .update(FeatureCategory::Eyes, eyes)?;
            let label = classify(&selection);
            json!({ "expression": label, "emoji": label.emoji() })
        }
        CliCommand::Catalog => {
            let features: Vec<Value> = FeatureCategory::ALL
                .iter()
                .map(|c| {
                    json!({
                        "category": c,
                        "label": category_label(*c),
                        "values": catalog::allowed_values(*c),
                        "options": catalog::allowed_values(*c)
                            .iter()
                            .map(|v| display_label(v))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            Value::Array(features)
        }
        CliCommand::Capture { target } => {
            let gen = AvatarGenerator::new(config);
            let image = gen
                .capture(&RasterBackend)
                .await
                .ok_or(AvatarError::CaptureFailed)?;
            match target {
                CaptureTarget::Dir(dir) => {
                    let path = image.write_to(dir)?;
                    tracing::info!(path = %path.display(), "avatar saved");
                    json!({ "path": path, "bytes": image.png.len() })
                }
                CaptureTarget::DataUrl => json!({
                    "fileName": image.file_name,
                    "dataUrl": image.to_data_url(),
                }),
            }
        }
    };
    Ok(value)
}
