//! Per-call options for [`read`](crate::read) and [`write`](crate::write).

use record_core::ColumnMapping;

/// Default delimiter joining the elements of a multi-valued cell.
pub const DEFAULT_ARRAY_SEPARATOR: char = '|';

/// Default field separator on the write path.
pub const DEFAULT_WRITE_SEPARATOR: char = ',';

/// How decoding treats cells that do not fit their hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Substitute sentinels (NaN, invalid date) and keep going
    #[default]
    Lenient,
    /// Abort the read with the first cell that fails to decode
    Strict,
}

/// Options for reading delimited text.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field separator; detected from the first line when `None`
    pub separator: Option<char>,

    /// Separator inside multi-valued cells
    pub array_separator: char,

    /// Column names overriding the header line
    pub fields: Option<Vec<String>>,

    /// Declared column types
    pub mapping: ColumnMapping,

    /// Infer types for columns without a mapping entry
    pub detect_types: bool,

    /// Whether the first line is a header (default: true)
    pub has_headers: bool,

    /// Lenient or strict cell decoding
    pub policy: DecodePolicy,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            separator: None,
            array_separator: DEFAULT_ARRAY_SEPARATOR,
            fields: None,
            mapping: ColumnMapping::default(),
            detect_types: true,
            has_headers: true,
            policy: DecodePolicy::Lenient,
        }
    }
}

impl ReadOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn with_array_separator(mut self, array_separator: char) -> Self {
        self.array_separator = array_separator;
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_mapping(mut self, mapping: ColumnMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_detect_types(mut self, detect_types: bool) -> Self {
        self.detect_types = detect_types;
        self
    }

    pub fn with_has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Options for writing delimited text.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field separator
    pub separator: char,

    /// Separator inside multi-valued cells
    pub array_separator: char,

    /// Column names and order; the first record's keys when `None`
    pub fields: Option<Vec<String>>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_WRITE_SEPARATOR,
            array_separator: DEFAULT_ARRAY_SEPARATOR,
            fields: None,
        }
    }
}

impl WriteOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_array_separator(mut self, array_separator: char) -> Self {
        self.array_separator = array_separator;
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}
