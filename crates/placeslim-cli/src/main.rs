//! placeslim: slims the crawler's place export
//!
//! Reads the `export const areaContents = {...};` dump produced by the
//! crawler, drops every place without usable coordinates, and writes the rest
//! as `const placeData = [...];` for the web page to load.
//!
//! Usage examples
//! --------------
//!
//! - Run with the fixed layout (the usual case)
//!   $ placeslim
//!
//! - Point at other files
//!   $ placeslim slim --input dump.js --output places.js
//!
//! - Check a written file
//!   $ placeslim inspect data_places_new.js
//!
//! Progress and summary lines go to stdout; diagnostics go to stderr through
//! `tracing` (`-v` or `RUST_LOG` to see them).
mod args;

use crate::args::{CliArgs, Commands, SlimArgs};
use clap::Parser;
use placeslim_core::config::{DEFAULT_OUTPUT_IDENTIFIER, DEFAULT_OUTPUT_PATH};
use placeslim_core::inspect;
use placeslim_core::{Outcome, SlimConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        None => slim(SlimArgs::default()),
        Some(Commands::Slim(slim_args)) => slim(slim_args),
        Some(Commands::Inspect { path, name }) => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
            let name = name.unwrap_or_else(|| DEFAULT_OUTPUT_IDENTIFIER.to_string());
            inspect_cmd(path, &name)
        }
    }
}

fn slim(args: SlimArgs) -> anyhow::Result<()> {
    let mut config = SlimConfig::default();
    if let Some(input) = args.input {
        config = config.with_input(input);
    }
    if let Some(output) = args.output {
        config = config.with_output(output);
    }
    if let Some(name) = args.source_name {
        config = config.with_source_identifier(name);
    }
    if let Some(name) = args.output_name {
        config = config.with_output_identifier(name);
    }

    tracing::debug!(?config, "resolved configuration");
    println!("Loading {}...", config.input_path.display());
    let report = placeslim_core::run(&config)?;

    println!("Places processed: {}", report.processed);
    println!("Excluded (no coordinates): {}", report.excluded);
    if report.skipped_categories > 0 {
        println!("Skipped categories (not a list): {}", report.skipped_categories);
    }

    match report.outcome {
        Outcome::Empty => {
            println!();
            println!("[IMPORTANT] 0 places were converted! The source data has no coordinates (mapx, mapy).");
            println!("The crawler needs to be changed to fetch coordinates.");
        }
        Outcome::Written(path) => {
            println!();
            println!("Done! {} has been created.", path.display());
            println!("Load this file from index.html for much faster page loads.");
        }
    }
    Ok(())
}

fn inspect_cmd(path: PathBuf, name: &str) -> anyhow::Result<()> {
    let (stats, places) = inspect::inspect_file(&path, name)?;

    println!("{}:", path.display());
    println!("  Places: {}", stats.total);
    println!("  With coordinates: {}", stats.with_coordinates);
    println!("  Without coordinates: {}", stats.without_coordinates);
    println!("  With image: {}", stats.with_image);

    println!();
    println!("Places per category:");
    for (category, count) in &stats.categories {
        println!("  {category}: {count}");
    }

    println!();
    println!("Samples:");
    for place in inspect::category_samples(&places) {
        println!(
            "  [{}] {} - {} ({}, {})",
            place.category_label(),
            place.title,
            place.address,
            place.lat,
            place.lng
        );
    }
    Ok(())
}
