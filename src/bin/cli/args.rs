//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the Neuronorm CLI binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Normative Scoring for Neuropsychological Tests
#[derive(Parser)]
#[command(name = "neuronorm")]
#[command(version = VERSION)]
#[command(about = "🧠 Neuronorm - Normative Scoring for Neuropsychological Tests")]
#[command(long_about = "
Score neuropsychological test administrations against built-in normative
tables: percentiles, standard scores, and ordinal classifications.

Common Usage:

  # List every supported battery
  neuronorm list

  # Batteries applicable to an eight-year-old
  neuronorm list --age 8

  # Describe a battery's subtests and calculated scores
  neuronorm info RAVLT

  # Score one or more administrations from a JSON file
  neuronorm score ./administration.json

  # Same, emitting the JSON report envelope
  neuronorm score ./administration.json --format json --out report.json

  # Score every administration file in a directory
  neuronorm batch ./administrations --out report.json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported test batteries, optionally filtered by subject age
    List(ListArgs),

    /// Show a battery's subtests, raw fields, and calculated scores
    Info(InfoArgs),

    /// Score administrations from a JSON file
    Score(ScoreArgs),

    /// Score every administration JSON file in a directory
    Batch(BatchArgs),
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Machine-readable JSON
    Json,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list batteries applicable to this age in years
    #[arg(long)]
    pub age: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Registry code of the battery (e.g. RAVLT, BPA2, TDE)
    pub code: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Path to a JSON file holding one administration or an array of them
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Also write the JSON report envelope to this path
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing administration JSON files
    pub dir: PathBuf,

    /// Write the combined JSON report envelope to this path
    #[arg(long)]
    pub out: Option<PathBuf>,
}
