// crates/placeslim-core/src/pipeline.rs

//! One slimming run: extract, project, then either write or report empty.

use crate::config::SlimConfig;
use crate::emit;
use crate::error::Result;
use crate::extract;
use crate::project;
use std::path::PathBuf;
use tracing::{info, warn};

/// What the final step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing survived filtering; no file was written.
    Empty,
    /// The slimmed list was written to this path.
    Written(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub processed: usize,
    pub excluded: usize,
    pub skipped_categories: usize,
    pub outcome: Outcome,
}

/// Runs the whole pipeline for `config`.
///
/// Errors only on a missing input, an I/O failure, or a payload that does not
/// parse as a mapping. An empty result is a successful run with
/// [`Outcome::Empty`].
pub fn run(config: &SlimConfig) -> Result<RunReport> {
    let tree = extract::load_tree(&config.input_path, &config.source_identifier)?;
    let projection = project::project(&tree)?;

    let outcome = if projection.places.is_empty() {
        warn!(
            excluded = projection.excluded,
            "no records survived filtering, output not written"
        );
        Outcome::Empty
    } else {
        emit::write_places(
            &config.output_path,
            &projection.places,
            &config.output_identifier,
        )?;
        Outcome::Written(config.output_path.clone())
    };

    info!(
        processed = projection.processed(),
        excluded = projection.excluded,
        "run finished"
    );

    Ok(RunReport {
        processed: projection.processed(),
        excluded: projection.excluded,
        skipped_categories: projection.skipped_categories,
        outcome,
    })
}
