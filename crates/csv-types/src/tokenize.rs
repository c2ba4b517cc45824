//! Quote-aware line splitting.
//!
//! Every `"` toggles the in-quotes state and is kept in the output; the
//! separator only splits outside quotes. There is no escape handling, so
//! irregular quoting produces a best-effort split instead of an error.

/// The quote character recognised by the tokenizer and the writer.
pub const QUOTE: char = '"';

/// Split one line into raw field strings.
///
/// The trailing field is always emitted, so an empty line yields one empty
/// field and a line ending in the separator yields a trailing empty field.
pub fn tokenize(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == separator && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
