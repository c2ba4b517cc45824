//! JSON conversions for record-core types.
//!
//! This crate provides bidirectional conversions between record-core's
//! `Value`/`Record` and `serde_json::Value`.
//!
//! # Modules
//!
//! - [`forward`] - Value/Record → JSON value conversion
//! - [`reverse`] - JSON value → Value/Record conversion
//!
//! # Example
//!
//! ```rust
//! use json_types::{json_to_records, records_to_json};
//! use record_core::Record;
//!
//! let records = vec![Record::builder().field("id", 1).field("ok", true).build()];
//! let json = records_to_json(&records);
//! assert_eq!(json, serde_json::json!([{ "id": 1, "ok": true }]));
//!
//! assert_eq!(json_to_records(&json).unwrap(), records);
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{record_to_json, records_to_json, JsonValue};
pub use reverse::{json_to_records, json_to_value, JsonConversionError};
