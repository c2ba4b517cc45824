//! Forward conversion: records → delimited text.

use crate::error::CsvError;
use crate::options::WriteOptions;
use crate::tokenize::QUOTE;
use chrono::{DateTime, SecondsFormat, Utc};
use record_core::{Record, Value};

/// Render records as delimited text.
///
/// The header is `options.fields` when set, else the column order of the
/// first record. Lines are joined with `\n` and no trailing newline is
/// written. An empty `records` slice produces just the header line when
/// fields are given and [`CsvError::EmptyInput`] otherwise.
pub fn write(records: &[Record], options: &WriteOptions) -> Result<String, CsvError> {
    let headers: Vec<String> = match (&options.fields, records.first()) {
        (Some(fields), _) => fields.clone(),
        (None, Some(first)) => first.columns().to_vec(),
        (None, None) => return Err(CsvError::EmptyInput),
    };

    let separator = options.separator.to_string();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(&separator));

    for record in records {
        let cells = headers
            .iter()
            .map(|header| match record.get(header) {
                Some(value) => render_cell(value, options).ok_or_else(|| CsvError::InvalidDate {
                    column: header.clone(),
                }),
                None => Ok(String::new()),
            })
            .collect::<Result<Vec<String>, CsvError>>()?;
        lines.push(cells.join(&separator));
    }

    Ok(lines.join("\n"))
}

/// Render one cell.
///
/// Returns `None` for a value with no textual form, which is only the
/// invalid date sentinel.
pub fn render_cell(value: &Value, options: &WriteOptions) -> Option<String> {
    match value {
        Value::String(s) => Some(
            if s.contains(options.separator) || s.contains(options.array_separator) {
                quote(s)
            } else {
                s.clone()
            },
        ),
        Value::Array(elements) => {
            let joined = elements
                .iter()
                .map(natural_form)
                .collect::<Option<Vec<String>>>()?
                .join(&options.array_separator.to_string());
            // An element carrying the field separator would split the row.
            Some(if joined.contains(options.separator) {
                quote(&joined)
            } else {
                joined
            })
        }
        other => natural_form(other),
    }
}

/// Wrap in quotes, doubling every quote inside.
fn quote(s: &str) -> String {
    let doubled = QUOTE.to_string().repeat(2);
    format!("{QUOTE}{}{QUOTE}", s.replace(QUOTE, &doubled))
}

/// Unquoted textual form of a value.
fn natural_form(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format_number(*n)),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::DateTime(dt) => Some(format_datetime(dt)),
        Value::InvalidDateTime => None,
        // Nested arrays flatten with commas, the way they print elsewhere.
        Value::Array(elements) => elements
            .iter()
            .map(natural_form)
            .collect::<Option<Vec<String>>>()
            .map(|parts| parts.join(",")),
    }
}

/// Shortest decimal form: `1`, `1.5`, `NaN`, `Infinity`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // Also covers negative zero
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// ISO-8601 in UTC with millisecond precision.
pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn comma() -> WriteOptions {
        WriteOptions::default()
    }

    #[test]
    fn test_header_from_first_record() {
        let records = vec![
            Record::builder().field("id", 1).field("name", "a").build(),
            Record::builder().field("name", "b").field("id", 2).build(),
        ];
        assert_eq!(write(&records, &comma()).unwrap(), "id,name\n1,a\n2,b");
    }

    #[test]
    fn test_quotes_strings_with_separators() {
        let records = vec![Record::builder()
            .field("Name", "Doe, John")
            .field("Tag", "a|b")
            .field("Plain", "x")
            .build()];
        assert_eq!(
            write(&records, &comma()).unwrap(),
            "Name,Tag,Plain\n\"Doe, John\",\"a|b\",x"
        );
    }

    #[test]
    fn test_doubles_quotes_inside_quoted_strings() {
        let value = Value::string(r#"say "hi", then go"#);
        assert_eq!(
            render_cell(&value, &comma()),
            Some(r#""say ""hi"", then go""#.to_string())
        );
        // No separator inside: left untouched
        let value = Value::string(r#"Mick "The man" Jagger"#);
        assert_eq!(
            render_cell(&value, &comma()),
            Some(r#"Mick "The man" Jagger"#.to_string())
        );
    }

    #[test]
    fn test_arrays_join_with_array_separator() {
        let value = Value::array([Value::from(5), Value::from(7)]);
        assert_eq!(render_cell(&value, &comma()), Some("5|7".to_string()));

        let opts = comma().with_separator(';').with_array_separator(',');
        let value = Value::array([Value::string("red"), Value::string("blue")]);
        assert_eq!(render_cell(&value, &opts), Some("red,blue".to_string()));
    }

    #[test]
    fn test_array_with_field_separator_is_quoted() {
        let value = Value::array([Value::string("a,b"), Value::string("c")]);
        assert_eq!(render_cell(&value, &comma()), Some("\"a,b|c\"".to_string()));
    }

    #[test]
    fn test_scalar_forms() {
        let render = |v: Value| render_cell(&v, &comma()).unwrap();
        assert_eq!(render(Value::from(2000)), "2000");
        assert_eq!(render(Value::Number(1.5)), "1.5");
        assert_eq!(render(Value::Number(-0.0)), "0");
        assert_eq!(render(Value::Number(f64::NAN)), "NaN");
        assert_eq!(render(Value::Number(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(render(Value::Bool(false)), "false");
        assert_eq!(
            render(Value::DateTime(
                Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
            )),
            "2021-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let records = vec![Record::builder().field("a", 1).build()];
        let opts = comma().with_fields(["a", "b", "c"]);
        assert_eq!(write(&records, &opts).unwrap(), "a,b,c\n1,,");
    }

    #[test]
    fn test_explicit_fields_order_and_subset() {
        let records = vec![Record::builder()
            .field("a", 1)
            .field("b", 2)
            .field("c", 3)
            .build()];
        let opts = comma().with_fields(["c", "a"]);
        assert_eq!(write(&records, &opts).unwrap(), "c,a\n3,1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(write(&[], &comma()), Err(CsvError::EmptyInput));
        assert_eq!(
            write(&[], &comma().with_fields(["a", "b"])).unwrap(),
            "a,b"
        );
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let records = vec![Record::builder()
            .field("born", Value::InvalidDateTime)
            .build()];
        assert_eq!(
            write(&records, &comma()),
            Err(CsvError::InvalidDate {
                column: "born".to_string()
            })
        );
    }

    #[test]
    fn test_tab_separator() {
        let records = vec![Record::builder()
            .field("Name", "Doe, John")
            .field("Kids", Value::array([Value::from(3), Value::from(4)]))
            .build()];
        let opts = comma().with_separator('\t');
        assert_eq!(
            write(&records, &opts).unwrap(),
            "Name\tKids\nDoe, John\t3|4"
        );
    }
}
