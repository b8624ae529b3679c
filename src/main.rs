use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use multimodal_analyzer::analysis;
use multimodal_analyzer::config::Config;
use multimodal_analyzer::output::terminal;
use multimodal_analyzer::vision::decode_image_blocking;

/// Multimodal analyzer: sentiment, topics, toxicity and OCR for a piece of
/// text and an optional image.
#[derive(Parser)]
#[command(name = "multimodal-analyzer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides ANALYZER_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Analyze text (and optionally an image) from the command line
    Analyze {
        /// The text to analyze
        #[arg(long, default_value = "")]
        text: String,

        /// Path to an image to classify and OCR
        #[arg(long)]
        image: Option<PathBuf>,

        /// Print the raw JSON payload instead of the colored report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("multimodal_analyzer=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            info!(ocr = ?config.ocr_backend, cors = ?config.cors_origins, "Starting server");

            let ocr = config.ocr_engine();
            let state = multimodal_analyzer::web::AppState::new(config, ocr);
            multimodal_analyzer::web::run_server(state).await?;
        }

        Commands::Analyze { text, image, json } => {
            let decoded = match image {
                Some(path) => {
                    let bytes = tokio::fs::read(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let img = decode_image_blocking(bytes)
                        .await
                        .with_context(|| format!("Failed to decode {}", path.display()))?;
                    Some(img)
                }
                None => None,
            };

            let ocr = config.ocr_engine();
            let response = analysis::analyze(&text, decoded.as_ref(), ocr.as_ref()).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                terminal::display_analysis(&response);
            }
        }
    }

    Ok(())
}
