//! Command line argument parsing for the Bazaar CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bazaar - a conversational shopping-assistant matching engine
#[derive(Parser, Debug, Clone)]
#[command(name = "bazaar")]
#[command(about = "Query understanding and product matching for a shopping assistant")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BazaarArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

    /// Catalog JSON file (defaults to the built-in sample catalog)
    #[arg(short, long, env = "BAZAAR_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BazaarArgs {
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
    /// Route a message through the full assistant pipeline
    #[command(name = "chat")]
    Chat(ChatArgs),

    /// Classify the intent of a message without matching
    #[command(name = "classify")]
    Classify(ClassifyArgs),

    /// Run the matching fallback chain directly
    #[command(name = "match")]
    Match(MatchArgs),

    /// List the products in the catalog
    #[command(name = "products")]
    Products,
}

/// Arguments for the chat command
#[derive(clap::Args, Debug, Clone)]
pub struct ChatArgs {
    /// The message to route
    pub text: String,

    /// External (Agent Mode) response to merge into the reply
    #[arg(long)]
    pub external: Option<String>,
}

/// Arguments for the classify command
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// The message to classify
    pub text: String,
}

/// Arguments for the match command
#[derive(clap::Args, Debug, Clone)]
pub struct MatchArgs {
    /// The query to match products against
    pub text: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 5)]
    pub limit: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
