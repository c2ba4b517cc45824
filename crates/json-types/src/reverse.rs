//! Reverse conversion: JSON value → Value.

use chrono::{DateTime, Utc};
use record_core::{Record, Value};

/// Error type for JSON documents that do not describe records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonConversionError {
    #[error("Expected a JSON array of objects or a single object")]
    NotAnArray,

    #[error("Element {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// Parse an RFC 3339 timestamp string.
fn parse_datetime_string(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Convert a JSON value to a `Value`.
///
/// Returns `None` for `null`, which callers treat as an absent field.
/// Nested objects have no cell representation and are kept as their
/// compact JSON text.
pub fn json_to_value(json: &serde_json::Value) -> Option<Value> {
    match json {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
        serde_json::Value::String(s) => Some(match parse_datetime_string(s) {
            Some(dt) => Value::DateTime(dt),
            None => Value::String(s.clone()),
        }),
        serde_json::Value::Array(arr) => {
            Some(Value::Array(arr.iter().filter_map(json_to_value).collect()))
        }
        serde_json::Value::Object(_) => Some(Value::String(json.to_string())),
    }
}

fn object_to_record(
    obj: &serde_json::Map<String, serde_json::Value>,
) -> Record {
    obj.iter()
        .filter_map(|(key, value)| json_to_value(value).map(|v| (key.as_str(), v)))
        .collect()
}

/// Convert a JSON array of objects (or one object) to records.
pub fn json_to_records(json: &serde_json::Value) -> Result<Vec<Record>, JsonConversionError> {
    match json {
        serde_json::Value::Object(obj) => Ok(vec![object_to_record(obj)]),
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                serde_json::Value::Object(obj) => Ok(object_to_record(obj)),
                _ => Err(JsonConversionError::NotAnObject { index }),
            })
            .collect(),
        _ => Err(JsonConversionError::NotAnArray),
    }
}
