//! Forward conversion: Value → JSON value.

use chrono::SecondsFormat;
use record_core::{Record, Value};
use serde_json::json;

/// Wrapper for JSON values.
#[derive(Debug, Clone)]
pub struct JsonValue(pub serde_json::Value);

impl JsonValue {
    /// Get the inner JSON value.
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the inner JSON value.
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            // Integral numbers print without a fraction; JSON has no NaN or infinity
            Value::Number(n) if !n.is_finite() => JsonValue(serde_json::Value::Null),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                JsonValue(json!(*n as i64))
            }
            Value::Number(n) => JsonValue(json!(*n)),

            Value::String(s) => JsonValue(json!(s)),
            Value::Bool(b) => JsonValue(json!(*b)),

            // Date/time - ISO 8601 format
            Value::DateTime(dt) => JsonValue(json!(dt.to_rfc3339_opts(SecondsFormat::Millis, true))),
            Value::InvalidDateTime => JsonValue(serde_json::Value::Null),

            Value::Array(elements) => JsonValue(serde_json::Value::Array(
                elements.iter().map(|v| JsonValue::from(v).0).collect(),
            )),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        JsonValue::from(&value)
    }
}

/// Convert a record to a JSON object in column order.
pub fn record_to_json(record: &Record) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = record
        .iter()
        .map(|(name, value)| (name.to_string(), JsonValue::from(value).0))
        .collect();
    serde_json::Value::Object(map)
}

/// Convert records to a JSON array of objects.
pub fn records_to_json(records: &[Record]) -> serde_json::Value {
    serde_json::Value::Array(records.iter().map(record_to_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn to_json(value: Value) -> serde_json::Value {
        JsonValue::from(value).into_inner()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_json(Value::from(42)), json!(42));
        assert_eq!(to_json(Value::Number(-3.0)), json!(-3));
        assert_eq!(to_json(Value::Number(1.5)), json!(1.5));
        assert_eq!(to_json(Value::Number(f64::NAN)), serde_json::Value::Null);
        assert_eq!(to_json(Value::Number(f64::INFINITY)), serde_json::Value::Null);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(to_json(Value::string("hi")), json!("hi"));
        assert_eq!(to_json(Value::Bool(true)), json!(true));
        assert_eq!(
            to_json(Value::DateTime(
                Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
            )),
            json!("2021-01-01T00:00:00.000Z")
        );
        assert_eq!(to_json(Value::InvalidDateTime), serde_json::Value::Null);
    }

    #[test]
    fn test_array() {
        let value = Value::array([Value::string("red"), Value::from(7)]);
        assert_eq!(to_json(value), json!(["red", 7]));
    }

    #[test]
    fn test_record_keeps_column_order() {
        let record = Record::builder()
            .field("z", 1)
            .field("a", "x")
            .build();
        let json = record_to_json(&record);
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_records_to_json() {
        let records = vec![
            Record::builder().field("id", 1).build(),
            Record::builder().field("id", 2).build(),
        ];
        assert_eq!(records_to_json(&records), json!([{ "id": 1 }, { "id": 2 }]));
    }
}
