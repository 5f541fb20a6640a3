use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// Bitcoin Output Script Classifier
#[derive(Parser)]
#[command(name = "script-classifier")]
#[command(about = "Bitcoin Output Script Classifier")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify an output script and derive the addresses it pays to
    Classify(commands::classify::ClassifyCommand),
    /// List the known networks and their address version bytes
    Networks(commands::networks::NetworksCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(command) => command.run(),
        Commands::Networks(command) => command.run(),
    }
}
