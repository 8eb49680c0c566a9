mod loader;
mod pipeline;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cricket_narrate::{Narrator, NarratorConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the commentary API key.
const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

#[derive(Parser)]
#[command(name = "cricket")]
#[command(about = "Ball-by-ball cricket match statistics and commentary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a match record into batting, bowling, and team statistics
    Stats {
        /// Path to a YAML or JSON match record
        file: PathBuf,
    },
    /// Aggregate statistics and generate free-text match commentary
    Analyze {
        /// Path to a YAML or JSON match record
        file: PathBuf,
        /// Model to request from the commentary API
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
        /// Chat completions endpoint URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { file } => match pipeline::stats(&file) {
            Ok(stats) => {
                let json =
                    serde_json::to_string_pretty(&stats).expect("statistics serialize to JSON");
                println!("{json}");
            }
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        Commands::Analyze {
            file,
            model,
            api_url,
        } => {
            let narrator = build_narrator(model, api_url);
            let report = pipeline::analyze(&file, narrator.as_ref());
            let json = serde_json::to_string_pretty(&report).expect("report serializes to JSON");
            println!("{json}");
        }
    }
}

/// Builds a narrator from the environment, or `None` when no API key is
/// configured (the pipeline then degrades to placeholder commentary).
fn build_narrator(model: String, api_url: String) -> Option<Narrator> {
    let api_key = match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::warn!("{API_KEY_VAR} not set; commentary will be skipped");
            return None;
        }
    };

    let config = NarratorConfig {
        api_url,
        model,
        ..NarratorConfig::new(api_key)
    };

    match Narrator::new(config) {
        Ok(narrator) => Some(narrator),
        Err(err) => {
            tracing::warn!(error = %err, "could not initialize commentary client");
            None
        }
    }
}
