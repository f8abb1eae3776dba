use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\d{3}\)\s*\d{3}-\d{4}").unwrap());
static FAX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)FAX:\s*\d{3}-\d{4}").unwrap());

/// Remove phone and fax numbers, drop URL / bracketed / staff lines, and
/// flatten what is left into one space-joined string.
///
/// Numbers go first: they often sit on the tail of a real address line.
pub fn strip(block: &str) -> String {
    let without_phones = PHONE_RE.replace_all(block, "");
    let without_fax = FAX_RE.replace_all(&without_phones, "");
    let flat = split_lines(&without_fax)
        .map(str::trim)
        .filter(|line| keep_line(line))
        .join(" ");
    flat
}

fn keep_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with("http") && !line.starts_with('[') && !line.contains("--")
}

/// Break on every line terminator, not just `\n`. Old exports carry bare `\r`
/// and form feeds; a `\r\n` pair just leaves an empty line behind.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}
