//! Bazaar CLI binary.

use bazaar::cli::{args::BazaarArgs, commands::execute_command};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = BazaarArgs::parse();

    // Map verbosity flags onto the tracing filter; RUST_LOG still wins
    // when set explicitly.
    let default_level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("bazaar={default_level}"))),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
