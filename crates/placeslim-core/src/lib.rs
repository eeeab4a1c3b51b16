// crates/placeslim-core/src/lib.rs

//! # placeslim-core
//!
//! Reads the crawler's `export const areaContents = {...};` dump, keeps the
//! places that carry usable coordinates, and writes them back as a flat
//! `const placeData = [...];` list of six-field records.
//!
//! ```no_run
//! use placeslim_core::{pipeline, Outcome, SlimConfig};
//!
//! let report = pipeline::run(&SlimConfig::default())?;
//! if let Outcome::Written(path) = &report.outcome {
//!     println!("{} places -> {}", report.processed, path.display());
//! }
//! # Ok::<(), placeslim_core::SlimError>(())
//! ```

pub mod common;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod inspect;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod project;

// Re-exports
pub use crate::common::PlaceStats;
pub use crate::config::SlimConfig;
pub use crate::error::{Result, SlimError};
pub use crate::model::{PlaceRaw, PlaceRecord};
pub use crate::pipeline::{run, Outcome, RunReport};
pub use crate::project::{parse_coordinate, project, Projection};
