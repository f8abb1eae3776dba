use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ZIP_RE;

static PO_BOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:P\.?O\.?|PO|O\.?)\s*Box\b").unwrap());

const MIN_LEN: usize = 20;
const MAX_LEN: usize = 200;
const MIN_TOKENS: usize = 3;

/// Why an address was flagged for manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspicionReason {
    TooShort,
    TooLong,
    NoZip,
    TooFewTokens,
    NoDigits,
    DoubledSeparator,
    PoBox,
}

impl fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SuspicionReason::TooShort => "shorter than 20 characters",
            SuspicionReason::TooLong => "longer than 200 characters",
            SuspicionReason::NoZip => "no ZIP code",
            SuspicionReason::TooFewTokens => "fewer than 3 words",
            SuspicionReason::NoDigits => "no digits",
            SuspicionReason::DoubledSeparator => "double comma or double space",
            SuspicionReason::PoBox => "PO box",
        };
        f.write_str(text)
    }
}

/// Every red flag raised by the address, in check order.
pub fn reasons(addr: &str) -> Vec<SuspicionReason> {
    let addr = addr.trim();
    let mut found = Vec::new();

    let len = addr.chars().count();
    if len < MIN_LEN {
        found.push(SuspicionReason::TooShort);
    }
    if len > MAX_LEN {
        found.push(SuspicionReason::TooLong);
    }
    if !ZIP_RE.is_match(addr) {
        found.push(SuspicionReason::NoZip);
    }
    if addr.split_whitespace().count() < MIN_TOKENS {
        found.push(SuspicionReason::TooFewTokens);
    }
    if !addr.chars().any(|c| c.is_numeric()) {
        found.push(SuspicionReason::NoDigits);
    }
    if addr.contains(",,") || addr.contains("  ") {
        found.push(SuspicionReason::DoubledSeparator);
    }
    if PO_BOX_RE.is_match(addr) {
        found.push(SuspicionReason::PoBox);
    }
    found
}

pub fn is_suspicious(addr: &str) -> bool {
    !reasons(addr).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn clean_address_passes() {
        assert!(!is_suspicious("Springfield, IL 62701 Main"));
        assert!(!is_suspicious("1218 Longworth House Office Building, Washington, DC 20515"));
    }

    #[test]
    fn length_threshold() {
        assert!(reasons("Springfield, IL 62701").is_empty());
        assert_eq!(reasons("Reno, NV 89501"), vec![SuspicionReason::TooShort]);
    }

    #[test]
    fn po_box_variants() {
        for addr in [
            "P.O. Box 55, Anytown, CA 90210",
            "PO Box 55, Anytown, CA 90210",
            "O. Box 55, Anytown, CA 90210",
            "O Box 55, Anytown, CA 90210",
            "p.o.box 55, Anytown, CA 90210",
        ] {
            assert_eq!(reasons(addr), vec![SuspicionReason::PoBox], "{addr}");
        }
    }

    #[test]
    fn box_inside_a_word_is_not_a_po_box() {
        assert!(!is_suspicious("12 Two Boxes Lane, Anytown, CA 90210"));
    }

    #[test]
    fn two_letters_fail_everything() {
        assert_eq!(
            reasons("IL"),
            vec![
                SuspicionReason::TooShort,
                SuspicionReason::NoZip,
                SuspicionReason::TooFewTokens,
                SuspicionReason::NoDigits,
            ]
        );
    }

    #[test]
    fn doubled_separators() {
        assert!(reasons("12 Main St,, Anytown, CA 90210").contains(&SuspicionReason::DoubledSeparator));
        assert!(reasons("12 Main St,  Anytown, CA 90210").contains(&SuspicionReason::DoubledSeparator));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(!is_suspicious("   1 Elm Street, Dover, DE 19901   "));
    }

    #[test]
    fn too_long() {
        let addr = format!("{} Street, Dover, DE 19901", "1 Elm ".repeat(40));
        assert!(reasons(&addr).contains(&SuspicionReason::TooLong));
    }

    #[test]
    fn missing_zip_and_digits() {
        assert_eq!(
            reasons("Hart Senate Office Building, Washington, DC"),
            vec![SuspicionReason::NoZip, SuspicionReason::NoDigits]
        );
    }

    #[test]
    fn non_ascii_digits_count_as_digits() {
        assert!(reasons("١٢ Main Street, Dover, DE ١٩٩٠١").is_empty());
    }

    proptest! {
        #[test]
        fn classification_is_stable(addr in ".{0,240}") {
            prop_assert_eq!(is_suspicious(&addr), is_suspicious(&addr));
            prop_assert_eq!(reasons(&addr), reasons(&addr));
        }
    }
}
