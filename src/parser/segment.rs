use std::sync::LazyLock;

use regex::Regex;

static BARE_ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").unwrap());

/// Two uppercase letters, whitespace, ZIP, at the very end.
pub static STATE_ZIP_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\s+\d{5}(?:-\d{4})?\b$").unwrap());

/// Split on every period except one directly after "P.O".
///
/// Only the second period of "P.O." is protected, so "P.O. Box 5" comes
/// out as "P" and "O. Box 5".
pub fn split_on_periods(flat: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, c) in flat.char_indices() {
        if c == '.' && !flat[..idx].ends_with("P.O") {
            pieces.push(&flat[start..idx]);
            start = idx + 1;
        }
    }
    pieces.push(&flat[start..]);
    pieces
}

/// Candidate addresses: trimmed period-delimited pieces that end in a
/// state code plus ZIP. Everything else is dropped.
pub fn segment(flat: &str) -> Vec<String> {
    split_on_periods(flat)
        .into_iter()
        .map(str::trim)
        .filter(|seg| !seg.is_empty() && !BARE_ZIP_RE.is_match(seg))
        .filter(|seg| STATE_ZIP_END_RE.is_match(seg))
        .map(str::to_string)
        .collect()
}
