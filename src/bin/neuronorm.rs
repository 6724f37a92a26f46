//! Neuronorm CLI - Normative Scoring for Neuropsychological Tests
//!
//! This binary scores test administrations supplied as JSON against the
//! built-in normative tables, lists the batteries applicable to a subject,
//! and batch-scores directories of administrations.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::List(args) => {
            cli::list_command(args)?;
        }
        Commands::Info(args) => {
            cli::info_command(args)?;
        }
        Commands::Score(args) => {
            cli::score_command(args)?;
        }
        Commands::Batch(args) => {
            cli::batch_command(args)?;
        }
    }

    Ok(())
}
