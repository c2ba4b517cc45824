//! csvrec Library
//!
//! Conversion between delimited text (CSV, TSV, semicolon separated) and
//! typed records, plus the option groups shared by the `csvrec` binary.
//!
//! # Features
//!
//! - Separator autodetection: comma, semicolon or tab, from the header line
//! - Type inference: numbers, ISO dates, booleans and strings per cell
//! - Array cells: multi-valued cells split on a second separator
//! - Column mappings: declared per-column types loaded from YAML
//!
//! # Crates
//!
//! - `record_core` - `Value`, `Record`, `ColumnType`, `ColumnMapping`
//! - `csv_types` - Tokenizer, decoder, reader and writer
//! - `json_types` - Records to and from JSON
//! - `csvrec_file` - Local file and stdio access
//!
//! # CLI Usage
//!
//! ```bash
//! # Delimited text to JSON, separator detected from the header
//! csvrec to-json people.csv --mapping-file mapping.yaml --pretty
//!
//! # JSON back to tab separated text
//! csvrec to-csv people.json --separator tab --output people.tsv
//!
//! # Which separator does this file use?
//! csvrec detect people.csv
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

pub mod config;

// Re-export the workspace crates for convenience
pub use csv_types as csv;
pub use csvrec_file as file;
pub use json_types as json;
pub use record_core as records;

use config::parse_separator;
use csv_types::{DecodePolicy, ReadOptions, WriteOptions, DEFAULT_ARRAY_SEPARATOR};
use record_core::ColumnMapping;

#[derive(Parser, Clone, Debug)]
pub struct ReadArgs {
    /// Field separator (detected from the header line when omitted)
    #[arg(long, value_parser = parse_separator, env = "CSVREC_SEPARATOR")]
    pub separator: Option<char>,

    /// Separator between values of a multi-valued cell
    #[arg(
        long,
        value_parser = parse_separator,
        default_value = "|",
        env = "CSVREC_ARRAY_SEPARATOR"
    )]
    pub array_separator: char,

    /// Column names overriding the header line (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// YAML file declaring column types (e.g. `Id: number`)
    #[arg(long, value_name = "PATH")]
    pub mapping_file: Option<PathBuf>,

    /// Keep undeclared columns as strings instead of inferring types
    #[arg(long)]
    pub no_detect_types: bool,

    /// Treat the first line as data
    #[arg(long)]
    pub no_headers: bool,

    /// Fail on the first cell that does not match its type
    #[arg(long)]
    pub strict: bool,
}

impl ReadArgs {
    /// Build reader options, loading the mapping file if one is given.
    pub fn to_options(&self) -> anyhow::Result<ReadOptions> {
        let mapping = match &self.mapping_file {
            Some(path) => ColumnMapping::from_file(path)
                .with_context(|| format!("Failed to load column mapping from {path:?}"))?,
            None => ColumnMapping::default(),
        };

        Ok(ReadOptions {
            separator: self.separator,
            array_separator: self.array_separator,
            fields: self.fields.clone(),
            mapping,
            detect_types: !self.no_detect_types,
            has_headers: !self.no_headers,
            policy: if self.strict {
                DecodePolicy::Strict
            } else {
                DecodePolicy::Lenient
            },
        })
    }
}

impl Default for ReadArgs {
    fn default() -> Self {
        Self {
            separator: None,
            array_separator: DEFAULT_ARRAY_SEPARATOR,
            fields: None,
            mapping_file: None,
            no_detect_types: false,
            no_headers: false,
            strict: false,
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct WriteArgs {
    /// Field separator
    #[arg(long, value_parser = parse_separator, default_value = ",", env = "CSVREC_SEPARATOR")]
    pub separator: char,

    /// Separator between values of a multi-valued cell
    #[arg(
        long,
        value_parser = parse_separator,
        default_value = "|",
        env = "CSVREC_ARRAY_SEPARATOR"
    )]
    pub array_separator: char,

    /// Columns to write, in order (comma separated); defaults to the first record's keys
    #[arg(long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,
}

// CLI type → writer option conversion
impl From<&WriteArgs> for WriteOptions {
    fn from(args: &WriteArgs) -> Self {
        Self {
            separator: args.separator,
            array_separator: args.array_separator,
            fields: args.fields.clone(),
        }
    }
}
