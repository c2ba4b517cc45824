//! Command-line configuration helpers.

pub mod separator;

pub use separator::{parse_separator, separator_name};
