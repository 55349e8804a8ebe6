//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::args::{BazaarArgs, OutputFormat};
use crate::error::Result;
use crate::intent::Intent;
use crate::matcher::MatchResult;

/// Envelope for the chat command.
#[derive(Debug, Serialize)]
pub struct ChatOutput {
    pub intent: Intent,
    pub response: String,
    pub products: Vec<MatchResult>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Envelope for the classify command.
#[derive(Debug, Serialize)]
pub struct ClassifyOutput {
    pub query: String,
    pub intent: Intent,
    pub timestamp: DateTime<Utc>,
}

/// Envelope for the match command.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub query: String,
    pub products: Vec<MatchResult>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Print a serializable result in the requested format.
pub fn output_result<T: Serialize>(human_summary: &str, value: &T, args: &BazaarArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{human_summary}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

/// Render one match line for human output.
pub fn format_match_line(index: usize, result: &MatchResult) -> String {
    format!(
        "{:>2}. [{:.3} via {}] {} — {} (${:.2})",
        index + 1,
        result.score,
        result.matched_via,
        result.product.name,
        result.product.brand,
        result.product.price
    )
}
