use std::sync::LazyLock;

use regex::Regex;

pub const START_MARKER: &str = "Office Listings";

static END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bCounties\b").unwrap());

/// Slice out the office block: everything after "Office Listings" up to the
/// first whole-word "Counties", or to the end of the text when that never
/// appears. `None` when the start marker is missing.
pub fn locate(text: &str) -> Option<&str> {
    let (_, after) = text.split_once(START_MARKER)?;
    let end = END_RE.find(after).map_or(after.len(), |m| m.start());
    Some(&after[..end])
}
