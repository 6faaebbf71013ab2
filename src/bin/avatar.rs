//! avatar-mood command-line binary.
//!
//! Prints avatar snapshots, mood analyses, and the feature catalog as JSON.
//!
//! # Environment Variables
//!
//! - `AVATAR_CONFIG` — optional path to a YAML generator config
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin avatar -- preset Funny
//! cargo run --bin avatar -- analyze smile raised big
//! cargo run --bin avatar -- capture ./out
//! ```

use avatar_mood::cli::{parse_command, run_command, USAGE};
use avatar_mood::config::GeneratorConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse_command(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let config = match std::env::var("AVATAR_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading config from {}", path);
            GeneratorConfig::from_yaml_file(&path)?
        }
        Err(_) => GeneratorConfig::default(),
    };

    let output = run_command(&command, config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
