//! Aggregate counts over a slimmed place list.
//!
//! Returned by [`PlaceStats::from_places`]; used by the `inspect` command to
//! sanity-check an emitted file.

use crate::model::PlaceRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceStats {
    pub total: usize,
    pub with_coordinates: usize,
    pub without_coordinates: usize,
    pub with_image: usize,
    /// (category label, count) in first-seen order.
    pub categories: Vec<(String, usize)>,
}

impl PlaceStats {
    pub fn from_places(places: &[PlaceRecord]) -> Self {
        let mut stats = PlaceStats {
            total: places.len(),
            ..Default::default()
        };

        for place in places {
            if place.has_coordinates() {
                stats.with_coordinates += 1;
            } else {
                stats.without_coordinates += 1;
            }
            if !place.image.is_empty() {
                stats.with_image += 1;
            }
            // Category count is ~10; a linear scan keeps first-seen order.
            let label = place.category_label();
            match stats.categories.iter_mut().find(|(c, _)| *c == label) {
                Some((_, n)) => *n += 1,
                None => stats.categories.push((label, 1)),
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(category: &str, lat: f64, image: &str) -> PlaceRecord {
        PlaceRecord {
            title: format!("{category}-{lat}"),
            lat,
            lng: 127.0,
            address: String::new(),
            category: category.into(),
            image: image.into(),
        }
    }

    #[test]
    fn counts_categories_in_first_seen_order() {
        let places = [
            place("14", 37.0, ""),
            place("12", 37.1, "http://img"),
            place("14", 0.0, ""),
            place("39", 35.0, "http://img"),
        ];
        let stats = PlaceStats::from_places(&places);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.with_coordinates, 3);
        assert_eq!(stats.without_coordinates, 1);
        assert_eq!(stats.with_image, 2);
        assert_eq!(
            stats.categories,
            vec![("14".to_string(), 2), ("12".to_string(), 1), ("39".to_string(), 1)]
        );
    }

    #[test]
    fn empty_input_gives_zeroes() {
        assert_eq!(PlaceStats::from_places(&[]), PlaceStats::default());
    }
}
