//! Table reader: delimited text → records.

use crate::detect::detect_separator;
use crate::error::CsvError;
use crate::options::{DecodePolicy, ReadOptions};
use crate::reverse::{decode, decode_strict, TypeHint};
use crate::tokenize::tokenize;
use record_core::Record;
use tracing::{debug, trace};

/// Rows whose fields concatenate to fewer characters than this are skipped.
const MIN_ROW_CHARS: usize = 2;

/// Parse a whole delimited-text document into records.
///
/// Parsing is lenient: rows with a different field count than the header
/// are decoded by position, header columns without a value are left out
/// of the record and values beyond the header are dropped. The only fatal
/// condition under the default policy is a failed separator detection.
pub fn read(text: &str, options: &ReadOptions) -> Result<Vec<Record>, CsvError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let separator = match options.separator {
        Some(sep) => sep,
        None => {
            let detected = detect_separator(lines[0])?;
            debug!("Detected separator {detected:?}");
            detected
        }
    };

    let rows: Vec<Vec<String>> = lines.iter().map(|line| tokenize(line, separator)).collect();

    let (headers, data_start) = resolve_headers(&rows, options);
    debug!(
        "Reading {} data lines with {} columns",
        rows.len().saturating_sub(data_start),
        headers.len()
    );

    let mut records = Vec::new();
    for (idx, values) in rows.iter().enumerate().skip(data_start) {
        let line_number = idx + 1;

        let row_chars: usize = values.iter().map(|v| v.chars().count()).sum();
        if row_chars < MIN_ROW_CHARS {
            trace!("Skipping blank line {line_number}");
            continue;
        }

        if values.len() != headers.len() {
            debug!(
                "Line {line_number} has {} fields, header has {}",
                values.len(),
                headers.len()
            );
        }

        let mut record = Record::new();
        for (header, raw) in headers.iter().zip(values) {
            let hint = column_hint(header, options);
            let value = match options.policy {
                DecodePolicy::Lenient => decode(raw, hint, options.array_separator),
                DecodePolicy::Strict => decode_strict(raw, hint, options.array_separator)
                    .map_err(|source| CsvError::Decode {
                        line: line_number,
                        column: header.clone(),
                        source,
                    })?,
            };
            record.insert(header.as_str(), value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Column names plus the index of the first data row.
fn resolve_headers(rows: &[Vec<String>], options: &ReadOptions) -> (Vec<String>, usize) {
    let data_start = if options.has_headers { 1 } else { 0 };

    let headers = match (&options.fields, options.has_headers) {
        (Some(fields), _) => fields.clone(),
        (None, true) => rows[0].clone(),
        (None, false) => {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{i}")).collect()
        }
    };

    (headers, data_start)
}

/// The declared hint for a column, else `Auto` when type detection is on.
fn column_hint(column: &str, options: &ReadOptions) -> Option<TypeHint> {
    match options.mapping.get(column) {
        Some(column_type) => Some(column_type.into()),
        None if options.detect_types => Some(TypeHint::Auto),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use chrono::{TimeZone, Utc};
    use record_core::{ColumnMapping, ColumnType, Value};

    fn comma() -> ReadOptions {
        ReadOptions::default().with_separator(',')
    }

    #[test]
    fn test_end_to_end_row() {
        let text = "Id,Name,Born,Colors,Joined,KidsAge\n\
                    1,\"Doe, John\",2000,red|blue,2021-01-01,5|7";
        let records = read(text, &comma()).unwrap();

        let expected = Record::builder()
            .field("Id", 1)
            .field("Name", "Doe, John")
            .field("Born", 2000)
            .field(
                "Colors",
                Value::array([Value::string("red"), Value::string("blue")]),
            )
            .field("Joined", Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
            .field("KidsAge", Value::array([Value::from(5), Value::from(7)]))
            .build();
        assert_eq!(records, vec![expected]);
        assert_eq!(
            records[0].columns(),
            ["Id", "Name", "Born", "Colors", "Joined", "KidsAge"]
        );
    }

    #[test]
    fn test_detects_separator_when_unset() {
        let records = read("Id;Name\n1;John\n2;Jane", &ReadOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("Name"), Some(&Value::string("Jane")));
    }

    #[test]
    fn test_no_separator_is_fatal() {
        assert_eq!(
            read("Id Name\n1 John", &ReadOptions::default()),
            Err(CsvError::NoSeparatorFound)
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = read("a,b\r\n1,x\r\n2,y\r\n", &comma()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].columns(), ["a", "b"]);
        assert_eq!(records[1].get("b"), Some(&Value::string("y")));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let text = "a,b\n1,2\n\n,\n3\n4,5\n";
        let records = read(text, &comma()).unwrap();
        // "", "," (joined ""), "3" and the trailing empty line are all too short.
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("a"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn test_ragged_rows_decode_by_position() {
        let records = read("a,b,c\n11,22\n33,44,55,66", &comma()).unwrap();

        assert_eq!(records[0].len(), 2);
        assert!(!records[0].contains("c"));
        assert_eq!(records[1].len(), 3);
        assert_eq!(records[1].get("c"), Some(&Value::Number(55.0)));
    }

    #[test]
    fn test_explicit_fields_replace_header_line() {
        let opts = comma().with_fields(["x", "y"]);
        let records = read("a,b\n10,20", &opts).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("x"), Some(&Value::Number(10.0)));
        assert!(!records[0].contains("a"));
    }

    #[test]
    fn test_headerless_input() {
        let opts = comma().with_has_headers(false);
        let records = read("10,20\n30,40", &opts).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].columns(), ["column_0", "column_1"]);

        let named = comma().with_has_headers(false).with_fields(["id", "age"]);
        let records = read("10,20\n30,40", &named).unwrap();
        assert_eq!(records[0].get("id"), Some(&Value::Number(10.0)));
    }

    #[test]
    fn test_mapping_overrides_inference() {
        let mapping = ColumnMapping::new()
            .with("Id", ColumnType::String)
            .with("Flag", ColumnType::Boolean)
            .with("Born", ColumnType::Date);
        let opts = comma().with_mapping(mapping);
        let records = read("Id,Flag,Born,Other\n1,yes,2000,2", &opts).unwrap();

        assert_eq!(records[0].get("Id"), Some(&Value::string("1")));
        assert_eq!(records[0].get("Flag"), Some(&Value::Bool(false)));
        assert_eq!(
            records[0].get("Born"),
            Some(&Value::DateTime(
                Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
            ))
        );
        assert_eq!(records[0].get("Other"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_detect_types_off_keeps_strings() {
        let mapping = ColumnMapping::new().with("n", ColumnType::Number);
        let opts = comma().with_detect_types(false).with_mapping(mapping);
        let records = read("n,s\n1,2\n", &opts).unwrap();

        assert_eq!(records[0].get("n"), Some(&Value::Number(1.0)));
        assert_eq!(records[0].get("s"), Some(&Value::string("2")));
    }

    #[test]
    fn test_lenient_sentinels() {
        let mapping = ColumnMapping::new()
            .with("n", ColumnType::Number)
            .with("d", ColumnType::Date);
        let records = read("n,d\nabc,never", &comma().with_mapping(mapping)).unwrap();

        assert!(records[0].get("n").is_some_and(Value::is_nan));
        assert_eq!(records[0].get("d"), Some(&Value::InvalidDateTime));
    }

    #[test]
    fn test_strict_policy_reports_line_and_column() {
        let mapping = ColumnMapping::new().with("n", ColumnType::Number);
        let opts = comma()
            .with_mapping(mapping)
            .with_policy(DecodePolicy::Strict);
        let err = read("n,s\n1,a\nabc,b", &opts).unwrap_err();

        assert_eq!(
            err,
            CsvError::Decode {
                line: 3,
                column: "n".to_string(),
                source: DecodeError::InvalidNumber {
                    value: "abc".to_string()
                },
            }
        );
    }

    #[test]
    fn test_header_only_document() {
        assert_eq!(read("a,b", &comma()).unwrap(), vec![]);
        assert_eq!(read("a,b\n", &comma()).unwrap(), vec![]);
    }

    #[test]
    fn test_custom_array_separator() {
        let opts = ReadOptions::default()
            .with_separator(';')
            .with_array_separator(',');
        let records = read("Id;KidsAge\n1;5,7\n2;3,4", &opts).unwrap();

        assert_eq!(
            records[1].get("KidsAge"),
            Some(&Value::array([Value::from(3), Value::from(4)]))
        );
    }
}
