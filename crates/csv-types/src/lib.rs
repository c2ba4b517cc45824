//! Delimited text conversions for record-core types.
//!
//! This crate provides bidirectional conversion between delimited text
//! (CSV, TSV, semicolon separated) and sequences of [`Record`].
//!
//! # Modules
//!
//! - [`tokenize`] - Quote-aware splitting of one line
//! - [`reverse`] - Raw cell text → `Value` decoding
//! - [`detect`] - Field separator detection from the header line
//! - [`reader`] - Whole text → records
//! - [`forward`] - Records → whole text
//!
//! # Example
//!
//! ```rust
//! use csv_types::{read, write, ReadOptions, WriteOptions};
//! use record_core::Value;
//!
//! let text = "Id,Name,Colors\n1,\"Doe, John\",red|blue";
//! let records = read(text, &ReadOptions::default()).unwrap();
//!
//! assert_eq!(records[0].get("Id"), Some(&Value::Number(1.0)));
//! assert_eq!(records[0].get("Name"), Some(&Value::string("Doe, John")));
//!
//! let tsv = write(&records, &WriteOptions::default().with_separator('\t')).unwrap();
//! assert_eq!(tsv, "Id\tName\tColors\n1\tDoe, John\tred|blue");
//! ```
//!
//! [`Record`]: record_core::Record

pub mod detect;
pub mod error;
pub mod forward;
pub mod options;
pub mod reader;
pub mod reverse;
pub mod tokenize;

pub use detect::{detect_separator, SEPARATOR_CANDIDATES};
pub use error::{CsvError, DecodeError};
pub use forward::{render_cell, write};
pub use options::{DecodePolicy, ReadOptions, WriteOptions, DEFAULT_ARRAY_SEPARATOR};
pub use reader::read;
pub use reverse::{decode, decode_strict, TypeHint};
pub use tokenize::tokenize;
