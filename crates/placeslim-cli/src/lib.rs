//! placeslim-cli
//! =============
//!
//! Command-line front end for `placeslim-core`.
//!
//! The crate provides a binary (`placeslim`). This small library target only
//! exists so the overview renders as a documentation page.
//!
//! Basic usage:
//!
//! ```text
//! placeslim                      # read ../홈페이지 크롤링/data/area_contents.js, write data_places_new.js
//! placeslim slim -i dump.js -o places.js
//! placeslim inspect places.js
//! RUST_LOG=placeslim_core=debug placeslim
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
