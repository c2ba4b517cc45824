//! Declared column types.
//!
//! `ColumnType` is what a caller states about a column ahead of decoding.
//! Inference ("auto") is a decoding mode, not a declared type, so it lives
//! with the decoder rather than here.
//!
//! # YAML Format
//!
//! ```yaml
//! Id: number
//! Joined: date
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Numeric column, decoded with permissive coercion
    Number,
    /// Text column, left undecoded
    String,
    /// Boolean column, true when the text mentions `true`
    Boolean,
    /// ISO-8601 date or date-time column
    Date,
}

impl ColumnType {
    /// The lowercase name used in mapping files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column type '{0}' (expected number, string, boolean or date)")]
pub struct UnknownColumnType(pub String);

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "boolean" | "bool" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            other => Err(UnknownColumnType(other.to_string())),
        }
    }
}
