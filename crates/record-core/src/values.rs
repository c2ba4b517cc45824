//! Value representations for csvrec.
//!
//! This module defines the dynamically typed cell value and the record
//! (row) type exchanged between the codecs and their callers.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Dynamically typed cell value.
///
/// A cell decodes to one scalar or to an ordered sequence of scalars when
/// it carries the array separator. Sequences are homogeneous by
/// construction but this is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit floating point number (may be NaN after lenient coercion)
    Number(f64),

    /// String value
    String(String),

    /// Boolean value
    Bool(bool),

    /// Instant in UTC
    DateTime(DateTime<Utc>),

    /// A date cell whose text could not be parsed
    InvalidDateTime,

    /// Ordered sequence of values
    Array(Vec<Value>),
}

impl Value {
    /// Create a number value.
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a date/time value.
    pub fn datetime(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }

    /// Create an array value.
    pub fn array(values: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(values.into_iter().collect())
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Check if this value is the invalid date sentinel.
    pub fn is_invalid_datetime(&self) -> bool {
        matches!(self, Self::InvalidDateTime)
    }

    /// Check if this value is a number that failed coercion.
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values)
    }
}

/// One decoded row.
///
/// Field lookup goes through a map; the order in which columns were first
/// inserted is kept separately because the writer derives its header from
/// it. Equality compares fields only, never order.
#[derive(Debug, Clone, Default)]
pub struct Record {
    columns: Vec<String>,
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new record with a builder pattern.
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        if !self.fields.contains_key(&name) {
            self.columns.push(name.clone());
        }
        self.fields.insert(name, value)
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Check whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .filter_map(|name| self.fields.get(name).map(|value| (name.as_str(), value)))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Builder for `Record`.
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a field to the record.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.insert(name, value.into());
        self
    }

    /// Build the record.
    pub fn build(self) -> Record {
        self.record
    }
}
