// crates/placeslim-core/src/project.rs

//! Walks the `region → sigungu → contents → [place]` tree and reduces every
//! geolocated place to a [`PlaceRecord`].

use crate::error::{Result, SlimError};
use crate::model::{PlaceRaw, PlaceRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Result of one projection pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    /// Reduced records in traversal order.
    pub places: Vec<PlaceRecord>,
    /// Items dropped for missing, unparsable or zero coordinates.
    pub excluded: usize,
    /// Category values that were not lists and were never visited.
    pub skipped_categories: usize,
}

impl Projection {
    pub fn processed(&self) -> usize {
        self.places.len()
    }
}

/// Coerces a coordinate field to a float.
///
/// Numbers are taken as-is and strings are trimmed and parsed. Anything else,
/// or a non-finite result, is `None`.
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

/// Rounds to 5 decimal places based on the exact binary value.
///
/// Scaling by `1e5` first would turn near-ties into exact ties, so the
/// rounding goes through correctly-rounded decimal formatting instead.
pub fn round_coordinate(v: f64) -> f64 {
    format!("{v:.5}").parse().unwrap_or(v)
}

/// A missing field counts as `0`, which excludes the item like a bad value.
fn coordinate(field: Option<&Value>) -> Option<f64> {
    match field {
        None => Some(0.0),
        Some(v) => parse_coordinate(v),
    }
}

/// Reduces one list item, or `None` if it must be excluded.
pub fn reduce_place(item: &Value) -> Option<PlaceRecord> {
    let raw = PlaceRaw::deserialize(item).ok()?;

    let lat = coordinate(raw.mapy.as_ref())?;
    let lng = coordinate(raw.mapx.as_ref())?;
    if lat == 0.0 || lng == 0.0 {
        return None;
    }

    Some(PlaceRecord {
        title: raw.title(),
        lat: round_coordinate(lat),
        lng: round_coordinate(lng),
        address: raw.address(),
        category: raw.category(),
        image: raw.image(),
    })
}

/// Entries of the mapping under `key`, or nothing if it is absent or not a
/// mapping.
fn children<'a>(parent: &'a Value, key: &str) -> impl Iterator<Item = (&'a String, &'a Value)> {
    parent
        .get(key)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter())
}

/// Projects the whole tree.
///
/// Fails only when the top level is not a mapping; every other anomaly is
/// skipped or counted.
pub fn project(tree: &Value) -> Result<Projection> {
    let regions = tree.as_object().ok_or_else(|| {
        SlimError::InvalidData("expected a mapping of region codes at the top level".into())
    })?;

    let mut out = Projection::default();

    for (area_code, area) in regions {
        if !area.is_object() {
            warn!(area_code = %area_code, "region is not a mapping, skipping");
            continue;
        }
        for (sigungu_code, sigungu) in children(area, "sigungu") {
            debug!(area_code = %area_code, sigungu_code = %sigungu_code, "projecting sub-region");
            for (type_key, items) in children(sigungu, "contents") {
                let Some(items) = items.as_array() else {
                    warn!(
                        area_code = %area_code,
                        sigungu_code = %sigungu_code,
                        type_key = %type_key,
                        "category is not a list, skipping"
                    );
                    out.skipped_categories += 1;
                    continue;
                };

                for item in items {
                    match reduce_place(item) {
                        Some(place) => out.places.push(place),
                        None => out.excluded += 1,
                    }
                }
            }
        }
    }

    debug!(
        processed = out.processed(),
        excluded = out.excluded,
        skipped_categories = out.skipped_categories,
        "projection finished"
    );
    Ok(out)
}
