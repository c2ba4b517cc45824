//! Error types for reading and writing delimited text.

/// Error raised when a single cell cannot be decoded under the strict policy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to parse '{value}' as number")]
    InvalidNumber { value: String },

    #[error("Failed to parse '{value}' as date")]
    InvalidDate { value: String },

    #[error("Failed to parse '{value}' as boolean: expected 'true' or 'false'")]
    InvalidBoolean { value: String },
}

/// Error type for table reads and writes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CsvError {
    /// None of the candidate separators occurs in the header line
    #[error("No separator found in the first line")]
    NoSeparatorFound,

    /// Nothing to derive a header from
    #[error("Cannot write an empty record sequence without an explicit field list")]
    EmptyInput,

    /// An invalid date has no ISO-8601 rendering
    #[error("Cannot render invalid date in column '{column}'")]
    InvalidDate { column: String },

    /// Strict decoding rejected a cell
    #[error("Line {line}, column '{column}': {source}")]
    Decode {
        line: usize,
        column: String,
        #[source]
        source: DecodeError,
    },
}
