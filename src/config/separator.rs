//! Separator argument parsing.

use anyhow::Context;

/// Parse a separator argument into a single character.
/// Supports:
/// - A literal character: ",", ";", "|"
/// - Names: "comma", "semicolon", "tab", "pipe", "space"
/// - The escape "\t"
pub fn parse_separator(s: &str) -> anyhow::Result<char> {
    if s.is_empty() {
        anyhow::bail!("Empty separator");
    }

    match s.to_ascii_lowercase().as_str() {
        "comma" => return Ok(','),
        "semicolon" => return Ok(';'),
        "tab" | "\\t" => return Ok('\t'),
        "pipe" => return Ok('|'),
        "space" => return Ok(' '),
        _ => {}
    }

    let mut chars = s.chars();
    let first = chars.next().context("Empty separator")?;
    if chars.next().is_some() {
        anyhow::bail!("Separator must be a single character or a known name: {s}");
    }
    Ok(first)
}

/// Human-readable name of a separator, the inverse of [`parse_separator`]
/// for the named ones.
pub fn separator_name(sep: char) -> String {
    match sep {
        ',' => "comma".to_string(),
        ';' => "semicolon".to_string(),
        '\t' => "tab".to_string(),
        '|' => "pipe".to_string(),
        ' ' => "space".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_characters() {
        assert_eq!(parse_separator(",").unwrap(), ',');
        assert_eq!(parse_separator(";").unwrap(), ';');
        assert_eq!(parse_separator("\t").unwrap(), '\t');
        assert_eq!(parse_separator("é").unwrap(), 'é');
    }

    #[test]
    fn test_names_and_escape() {
        assert_eq!(parse_separator("tab").unwrap(), '\t');
        assert_eq!(parse_separator("TAB").unwrap(), '\t');
        assert_eq!(parse_separator("\\t").unwrap(), '\t');
        assert_eq!(parse_separator("semicolon").unwrap(), ';');
        assert_eq!(parse_separator("pipe").unwrap(), '|');
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_separator("").is_err());
        assert!(parse_separator(",;").is_err());
        assert!(parse_separator("colon").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for sep in [',', ';', '\t', '|', ' '] {
            assert_eq!(parse_separator(&separator_name(sep)).unwrap(), sep);
        }
        assert_eq!(separator_name(':'), ":");
    }
}
