//! # faqbot CLI
//!
//! Command-line interface and HTTP server for faqbot - an FAQ assistant that
//! answers questions by letting Gemini call lookup tools over an FAQ table.
//!
//! ## Usage
//!
//! - `faqbot` - Start the HTTP API (same as `faqbot serve`)
//! - `faqbot ask "question"` - Answer a single question
//! - `faqbot tools` - Show available tools

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod server;

use commands::{ask_command, serve_command, tools_command};
use config::CliConfigLoader;

/// faqbot - An FAQ assistant backed by Gemini function calling
#[derive(Parser)]
#[command(name = "faqbot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An FAQ chat backend driven by LLM tool calling")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API key override
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Model name override
    #[arg(long, global = true)]
    model: Option<String>,

    /// FAQ data file override
    #[arg(long, global = true)]
    faq_data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Working directory
    #[arg(long, global = true)]
    working_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer a single question and exit
    Ask {
        /// The question to ask
        message: String,

        /// Print `{"response": ...}` / `{"error": ...}` instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show available tools
    Tools,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(api_key) = &cli.api_key {
        loader = loader.with_api_key_override(api_key.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(model) = &cli.model {
        loader = loader.with_model_override(model.clone());
    }

    if let Some(faq_data) = &cli.faq_data {
        loader = loader.with_faq_data_override(faq_data.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins when set
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Change working directory if specified
    if let Some(working_dir) = &cli.working_dir {
        std::env::set_current_dir(working_dir)?;
    }

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Serve { port }) => {
            let loader = match port {
                Some(port) => config_loader.with_port_override(port),
                None => config_loader,
            };
            serve_command(loader).await
        }
        Some(Commands::Ask { message, json }) => ask_command(message, config_loader, json).await,
        Some(Commands::Tools) => tools_command(config_loader).await,
        // Default to serving the API
        None => serve_command(config_loader).await,
    }
}
