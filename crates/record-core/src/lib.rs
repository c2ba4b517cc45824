//! Core types for the csvrec framework.
//!
//! This crate provides the foundational types shared by the codec crates:
//!
//! - [`Value`] - Dynamically typed cell value
//! - [`Record`] - One decoded row (column name -> value)
//! - [`ColumnType`] - Declared column type hint
//! - [`ColumnMapping`] - Per-column type hints, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! record-core (this crate)
//!    │
//!    ├─── csv-types    (delimited text <-> Record)
//!    ├─── json-types   (JSON <-> Record)
//!    └─── csvrec-file  (file access around csv-types)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{Record, Value};
//!
//! let record = Record::builder()
//!     .field("Id", Value::number(1.0))
//!     .field("Name", Value::string("Doe, John"))
//!     .build();
//!
//! assert_eq!(record.get("Id").and_then(Value::as_f64), Some(1.0));
//! assert_eq!(record.columns(), ["Id", "Name"]);
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{ColumnMapping, MappingError};
pub use types::{ColumnType, UnknownColumnType};
pub use values::{Record, RecordBuilder, Value};
