// crates/placeslim-core/src/inspect.rs
use crate::common::PlaceStats;
use crate::error::{Result, SlimError};
use crate::extract;
use crate::loader;
use crate::model::PlaceRecord;
use serde_json::Value;
use std::path::Path;

/// Parses the records out of an emitted `const <identifier> = [...];` file.
pub fn parse_places(text: &str, identifier: &str) -> Result<Vec<PlaceRecord>> {
    let tree = extract::parse_declaration(text, identifier)?;
    if !matches!(tree, Value::Array(_)) {
        return Err(SlimError::InvalidData(format!(
            "`{identifier}` is not declared as an array"
        )));
    }
    Ok(serde_json::from_value(tree)?)
}

/// Reads an emitted file back into memory.
pub fn load_places(path: &Path, identifier: &str) -> Result<Vec<PlaceRecord>> {
    let text = loader::read_to_string(path)?;
    parse_places(&text, identifier)
}

/// Loads an emitted file and summarizes it.
pub fn inspect_file(path: &Path, identifier: &str) -> Result<(PlaceStats, Vec<PlaceRecord>)> {
    let places = load_places(path, identifier)?;
    Ok((PlaceStats::from_places(&places), places))
}

/// First record of each category, in first-seen order.
pub fn category_samples(places: &[PlaceRecord]) -> Vec<&PlaceRecord> {
    let mut samples: Vec<&PlaceRecord> = Vec::new();
    for place in places {
        if !samples.iter().any(|s| s.category == place.category) {
            samples.push(place);
        }
    }
    samples
}
