use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for placeslim
#[derive(Debug, Parser)]
#[command(
    name = "placeslim",
    version,
    about = "Slims the area/sigungu place export down to geolocated six-field records"
)]
pub struct CliArgs {
    /// Show debug logs on stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter the source export and write the slimmed file (default)
    Slim(SlimArgs),

    /// Print statistics for a previously written slimmed file
    Inspect {
        /// Slimmed file to read (default: data_places_new.js)
        path: Option<PathBuf>,

        /// Name of the declared array
        #[arg(long = "name")]
        name: Option<String>,
    },
}

#[derive(Debug, Default, clap::Args)]
pub struct SlimArgs {
    /// Source export (default: ../홈페이지 크롤링/data/area_contents.js)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file, overwritten on success (default: data_places_new.js)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Name of the exported object in the source file
    #[arg(long = "source-name")]
    pub source_name: Option<String>,

    /// Name of the constant declared in the output file
    #[arg(long = "output-name")]
    pub output_name: Option<String>,
}
