//! Field separator detection.

use crate::error::CsvError;

/// Candidate separators, in tie-breaking order.
pub const SEPARATOR_CANDIDATES: [char; 3] = [',', ';', '\t'];

/// Return the candidate separator that appears most often in `header_line`.
///
/// Ties go to the candidate listed first in [`SEPARATOR_CANDIDATES`].
pub fn detect_separator(header_line: &str) -> Result<char, CsvError> {
    let mut counts = [0usize; SEPARATOR_CANDIDATES.len()];
    for ch in header_line.chars() {
        if let Some(idx) = SEPARATOR_CANDIDATES.iter().position(|c| *c == ch) {
            counts[idx] += 1;
        }
    }

    let mut best: Option<(char, usize)> = None;
    for (sep, count) in SEPARATOR_CANDIDATES.iter().zip(counts) {
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((*sep, count));
        }
    }

    best.map(|(sep, _)| sep).ok_or(CsvError::NoSeparatorFound)
}
