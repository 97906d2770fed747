//! Command line argument parsing for the Topica CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Topica - collapsed Gibbs sampling for LDA topic modeling
#[derive(Parser, Debug, Clone)]
#[command(name = "topica")]
#[command(about = "A collapsed Gibbs sampling engine for LDA topic modeling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TopicaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TopicaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fit a topic model to a tokenized corpus
    Train(TrainArgs),

    /// Show statistics for a tokenized corpus
    Stats(StatsArgs),
}

/// Arguments for fitting a topic model
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the corpus file: a JSON array of arrays of token strings
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub input: PathBuf,

    /// Number of topics to infer
    #[arg(short = 'k', long, default_value_t = 10)]
    pub topics: usize,

    /// Document-topic smoothing hyperparameter (> 0)
    #[arg(long, default_value_t = 0.1)]
    pub alpha: f64,

    /// Topic-word smoothing hyperparameter (> 0)
    #[arg(long, default_value_t = 0.01)]
    pub beta: f64,

    /// Number of full Gibbs sweeps over the corpus
    #[arg(short = 'n', long, default_value_t = 100)]
    pub sweeps: usize,

    /// Random seed; the same seed reproduces the same model
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Number of top words reported per topic
    #[arg(short = 'w', long = "top-words", default_value_t = 10)]
    pub top_words: usize,

    /// Write the full report as JSON to this file
    #[arg(short, long, value_name = "REPORT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file: a JSON array of arrays of token strings
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub input: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
