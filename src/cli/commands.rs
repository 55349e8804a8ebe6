//! Command implementations for the Bazaar CLI.

use chrono::Utc;

use crate::catalog::{loader, Catalog};
use crate::cli::args::{BazaarArgs, ChatArgs, ClassifyArgs, Command, MatchArgs, OutputFormat};
use crate::cli::output::{format_match_line, output_result, ChatOutput, ClassifyOutput, MatchOutput};
use crate::error::Result;
use crate::router::QueryRouter;

/// Execute a CLI command.
pub fn execute_command(args: BazaarArgs) -> Result<()> {
    let catalog = load_catalog(&args)?;
    let router = QueryRouter::new(catalog);

    match &args.command {
        Command::Chat(chat_args) => chat(&router, chat_args.clone(), &args),
        Command::Classify(classify_args) => classify(&router, classify_args.clone(), &args),
        Command::Match(match_args) => match_products(&router, match_args.clone(), &args),
        Command::Products => products(&router, &args),
    }
}

/// Load the catalog named by `--catalog`, or fall back to the sample.
///
/// A given-but-unloadable catalog is fatal: the engine must not serve
/// against a catalog the operator did not intend.
fn load_catalog(args: &BazaarArgs) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => loader::load_catalog(path),
        None => {
            if args.verbosity() > 1 {
                println!("No catalog file given, using the built-in sample catalog");
            }
            Ok(loader::sample_catalog())
        }
    }
}

/// Route a message through the full pipeline.
fn chat(router: &QueryRouter, args: ChatArgs, cli_args: &BazaarArgs) -> Result<()> {
    let response = router.handle(&args.text, args.external.as_deref());

    if cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0 {
        println!("[{}] {}", response.intent, response.reply);
        for (i, result) in response.matches.iter().enumerate() {
            println!("{}", format_match_line(i, result));
        }
        return Ok(());
    }

    let output = ChatOutput {
        intent: response.intent,
        response: response.reply,
        count: response.matches.len(),
        products: response.matches,
        timestamp: Utc::now(),
    };
    output_result("", &output, cli_args)
}

/// Classify without matching.
fn classify(router: &QueryRouter, args: ClassifyArgs, cli_args: &BazaarArgs) -> Result<()> {
    let intent = router.classify(&args.text);
    let output = ClassifyOutput {
        query: args.text,
        intent,
        timestamp: Utc::now(),
    };
    output_result(&format!("intent: {intent}"), &output, cli_args)
}

/// Run the matching chain directly.
fn match_products(router: &QueryRouter, args: MatchArgs, cli_args: &BazaarArgs) -> Result<()> {
    let matches = router.top_matches(&args.text, args.limit);

    if cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0 {
        if matches.is_empty() {
            println!("No matches (catalog is empty)");
        }
        for (i, result) in matches.iter().enumerate() {
            println!("{}", format_match_line(i, result));
        }
        return Ok(());
    }

    let output = MatchOutput {
        query: args.text,
        count: matches.len(),
        products: matches,
        timestamp: Utc::now(),
    };
    output_result("", &output, cli_args)
}

/// Dump the catalog.
fn products(router: &QueryRouter, cli_args: &BazaarArgs) -> Result<()> {
    if cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0 {
        for product in router.catalog().iter() {
            println!(
                "{:>3}  {} — {} / {} (${:.2})",
                product.id, product.name, product.brand, product.category, product.price
            );
        }
        return Ok(());
    }

    output_result("", &router.catalog().products(), cli_args)
}
