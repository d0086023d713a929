//! Hexapawn CLI - play against a computer that learns from its losses
//!
//! This CLI provides:
//! - Interactive games in the terminal
//! - Batch training against a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(version, about = "Hexapawn against a matchbox-learning computer", long_about = None)]
struct Cli {
    /// Log agent decisions at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the computer
    Play(hexapawn::cli::commands::play::PlayArgs),

    /// Train the computer against a random opponent
    Train(hexapawn::cli::commands::train::TrainArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => hexapawn::cli::commands::play::execute(args),
        Commands::Train(args) => hexapawn::cli::commands::train::execute(args),
    }
}
