//! Column mapping definitions.
//!
//! A mapping attaches a declared [`ColumnType`] to column names. Columns
//! not listed fall back to whatever the decoder does without a hint.
//!
//! Mapping files are YAML. Each entry is either the short form or the item
//! form; both may be mixed in one file:
//!
//! ```yaml
//! Id: number
//! Joined:
//!   type: date
//! ```

use crate::types::ColumnType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for mapping operations.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// Error reading mapping file
    #[error("Failed to read mapping file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MappingEntry {
    Short(ColumnType),
    Item {
        #[serde(rename = "type")]
        column_type: ColumnType,
    },
}

impl From<MappingEntry> for ColumnType {
    fn from(entry: MappingEntry) -> Self {
        match entry {
            MappingEntry::Short(column_type) | MappingEntry::Item { column_type } => column_type,
        }
    }
}

/// Per-column type hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    columns: HashMap<String, ColumnType>,
}

impl ColumnMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mapping from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MappingError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a mapping from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, MappingError> {
        let entries: Option<HashMap<String, MappingEntry>> = serde_yaml::from_str(yaml)?;
        let columns = entries
            .unwrap_or_default()
            .into_iter()
            .map(|(name, entry)| (name, entry.into()))
            .collect();
        Ok(Self { columns })
    }

    /// Add a column type, builder style.
    pub fn with(mut self, column: impl Into<String>, column_type: ColumnType) -> Self {
        self.insert(column, column_type);
        self
    }

    /// Add or replace a column type.
    pub fn insert(&mut self, column: impl Into<String>, column_type: ColumnType) {
        self.columns.insert(column.into(), column_type);
    }

    /// Look up the declared type of a column.
    pub fn get(&self, column: &str) -> Option<ColumnType> {
        self.columns.get(column).copied()
    }

    /// Number of mapped columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether no column is mapped.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ColumnType)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (K, ColumnType)>>(iter: I) -> Self {
        let columns = iter
            .into_iter()
            .map(|(name, column_type)| (name.into(), column_type))
            .collect();
        Self { columns }
    }
}
