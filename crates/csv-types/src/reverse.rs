//! Reverse conversion: raw cell text → `Value`.
//!
//! Decoding is loose. Numbers use permissive coercion, booleans
//! match on substrings and unparseable dates become
//! [`Value::InvalidDateTime`]. [`decode_strict`] reports those cases as
//! errors instead.

use crate::error::DecodeError;
use crate::tokenize::{tokenize, QUOTE};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use record_core::{ColumnType, Value};

/// Type used to decode one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    /// Infer the type from the text
    Auto,
    Number,
    String,
    Boolean,
    Date,
}

impl From<ColumnType> for TypeHint {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Number => Self::Number,
            ColumnType::String => Self::String,
            ColumnType::Boolean => Self::Boolean,
            ColumnType::Date => Self::Date,
        }
    }
}

/// Decode a raw cell, substituting sentinels for unparseable text.
///
/// With `hint` set to `None` the (unquoted) text is returned as a string,
/// unless it contains `array_separator`, in which case it still becomes an
/// array of strings.
pub fn decode(raw: &str, hint: Option<TypeHint>, array_separator: char) -> Value {
    let value = strip_quotes(raw);

    if value.contains(array_separator) {
        return Value::Array(
            tokenize(value, array_separator)
                .iter()
                .map(|piece| decode(piece, hint, array_separator))
                .collect(),
        );
    }

    match resolve_hint(value, hint) {
        Some(TypeHint::Number) => Value::Number(coerce_number(value)),
        Some(TypeHint::Boolean) => Value::Bool(contains_ignore_case(value, "true")),
        Some(TypeHint::Date) => parse_datetime(value)
            .map(Value::DateTime)
            .unwrap_or(Value::InvalidDateTime),
        _ => Value::String(value.to_string()),
    }
}

/// Decode a raw cell, failing where [`decode`] would produce a sentinel.
pub fn decode_strict(
    raw: &str,
    hint: Option<TypeHint>,
    array_separator: char,
) -> Result<Value, DecodeError> {
    let value = strip_quotes(raw);

    if value.contains(array_separator) {
        let items: Result<Vec<Value>, DecodeError> = tokenize(value, array_separator)
            .iter()
            .map(|piece| decode_strict(piece, hint, array_separator))
            .collect();
        return Ok(Value::Array(items?));
    }

    match resolve_hint(value, hint) {
        Some(TypeHint::Number) => {
            let n = coerce_number(value);
            if n.is_nan() && !is_nan_literal(value) {
                return Err(DecodeError::InvalidNumber {
                    value: value.to_string(),
                });
            }
            Ok(Value::Number(n))
        }
        Some(TypeHint::Boolean) => {
            if contains_ignore_case(value, "true") {
                Ok(Value::Bool(true))
            } else if contains_ignore_case(value, "false") {
                Ok(Value::Bool(false))
            } else {
                Err(DecodeError::InvalidBoolean {
                    value: value.to_string(),
                })
            }
        }
        Some(TypeHint::Date) => {
            parse_datetime(value)
                .map(Value::DateTime)
                .ok_or_else(|| DecodeError::InvalidDate {
                    value: value.to_string(),
                })
        }
        _ => Ok(Value::String(value.to_string())),
    }
}

/// Remove exactly one leading and one trailing quote when both are present.
fn strip_quotes(raw: &str) -> &str {
    if raw.starts_with(QUOTE) && raw.ends_with(QUOTE) {
        let inner = raw.strip_prefix(QUOTE).unwrap_or(raw);
        inner.strip_suffix(QUOTE).unwrap_or(inner)
    } else {
        raw
    }
}

/// Replace `Auto` with the type inferred from the text.
fn resolve_hint(value: &str, hint: Option<TypeHint>) -> Option<TypeHint> {
    match hint {
        Some(TypeHint::Auto) => Some(infer_type(value)),
        other => other,
    }
}

/// Classify text: digits, then ISO date prefix, then boolean words.
fn infer_type(value: &str) -> TypeHint {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        TypeHint::Number
    } else if has_iso_date_prefix(value) {
        TypeHint::Date
    } else if contains_ignore_case(value, "true") || contains_ignore_case(value, "false") {
        TypeHint::Boolean
    } else {
        TypeHint::String
    }
}

/// `YYYY-MM-DD` at the start of the text, anything may follow.
fn has_iso_date_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn is_nan_literal(value: &str) -> bool {
    value.trim() == "NaN"
}

/// Permissive numeric coercion.
///
/// Whitespace is trimmed, empty text is zero, `0x`/`0o`/`0b` prefixes select
/// a radix and `Infinity` is accepted with an optional sign. Anything that
/// is not a plain decimal literal after that is NaN.
pub(crate) fn coerce_number(value: &str) -> f64 {
    let s = value.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // `f64::from_str` also takes "inf" and "nan" spellings; only digits,
    // signs, dots and exponents are numeric here.
    let literal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !literal {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse ISO-8601 dates and date-times.
///
/// Offsets are honoured; date-times without one are taken as UTC.
pub(crate) fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let s = value.trim();

    // Try RFC3339 first
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Fallback: date-time without timezone, with T or space
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ndt.and_utc());
        }
    }

    // Fallback: date only, then year-month and year
    let date = if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Some(date)
    } else if s.len() == 7 {
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()
    } else if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    } else {
        None
    };

    date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|ndt| ndt.and_utc())
}
