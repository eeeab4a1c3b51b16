// crates/placeslim-core/src/model.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw place record as it comes from the crawler export.
///
/// Every field is optional and loosely typed; the accessors below apply the
/// defaults. Unknown fields (`contentid`, `tel`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceRaw {
    #[serde(default)]
    pub title: Option<Value>,
    /// Longitude (VisitKorea convention).
    #[serde(default)]
    pub mapx: Option<Value>,
    /// Latitude.
    #[serde(default)]
    pub mapy: Option<Value>,
    #[serde(default)]
    pub addr1: Option<Value>,
    /// Kept with its JSON type; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub contenttypeid: Option<Value>,
    #[serde(default)]
    pub firstimage: Option<Value>,
    #[serde(default)]
    pub firstimage2: Option<Value>,
}

impl PlaceRaw {
    pub fn title(&self) -> String {
        text_or_empty(self.title.as_ref())
    }

    pub fn address(&self) -> String {
        text_or_empty(self.addr1.as_ref())
    }

    /// `contenttypeid` as-is, or `""` when the field is absent.
    pub fn category(&self) -> Value {
        self.contenttypeid
            .clone()
            .unwrap_or_else(|| Value::String(String::new()))
    }

    /// `firstimage`, or `firstimage2` when the first is empty.
    pub fn image(&self) -> String {
        let first = text_or_empty(self.firstimage.as_ref());
        if first.is_empty() {
            text_or_empty(self.firstimage2.as_ref())
        } else {
            first
        }
    }
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Strings verbatim, numbers as their JSON text, everything else empty.
fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// The reduced six-field record written to the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub category: Value,
    pub image: String,
}

impl PlaceRecord {
    /// The category as display text: strings unquoted, anything else as JSON.
    pub fn category_label(&self) -> String {
        match &self.category {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat != 0.0 && self.lng != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: Value) -> PlaceRaw {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let p = raw(json!({}));
        assert_eq!(p.title(), "");
        assert_eq!(p.address(), "");
        assert_eq!(p.category(), "");
        assert_eq!(p.image(), "");
    }

    #[test]
    fn image_falls_back_to_second_image() {
        let p = raw(json!({"firstimage": "", "firstimage2": "http://img/2.jpg"}));
        assert_eq!(p.image(), "http://img/2.jpg");

        let p = raw(json!({"firstimage": "http://img/1.jpg", "firstimage2": "http://img/2.jpg"}));
        assert_eq!(p.image(), "http://img/1.jpg");

        let p = raw(json!({"firstimage": null, "firstimage2": ""}));
        assert_eq!(p.image(), "");
    }

    #[test]
    fn category_keeps_its_json_type() {
        assert_eq!(raw(json!({"contenttypeid": 12})).category(), json!(12));
        assert_eq!(raw(json!({"contenttypeid": "12"})).category(), json!("12"));
        assert_eq!(raw(json!({"contenttypeid": null})).category(), Value::Null);
        assert_eq!(raw(json!({})).category(), json!(""));
    }

    #[test]
    fn category_label_unquotes_strings() {
        let mut rec = PlaceRecord {
            title: String::new(),
            lat: 37.5,
            lng: 127.0,
            address: String::new(),
            category: json!("39"),
            image: String::new(),
        };
        assert_eq!(rec.category_label(), "39");
        rec.category = json!(39);
        assert_eq!(rec.category_label(), "39");
        assert!(serde_json::to_string(&rec).unwrap().contains("\"category\":39"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p = raw(json!({"title": "경복궁", "contentid": "126508", "tel": ""}));
        assert_eq!(p.title(), "경복궁");
    }

    #[test]
    fn record_serializes_fields_in_declared_order() {
        let rec = PlaceRecord {
            title: "A".into(),
            lat: 37.5,
            lng: 127.1,
            address: "Seoul".into(),
            category: "12".into(),
            image: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"{"title":"A","lat":37.5,"lng":127.1,"address":"Seoul","category":"12","image":""}"#
        );
    }
}
