use std::sync::LazyLock;

use regex::{Match, Regex};

use super::ZIP_RE;

static STATE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2} $").unwrap());

/// ZIP matches that directly follow a state code and a single space. A ZIP
/// anywhere else (street or suite number) is not a boundary.
pub fn state_zip_boundaries(addr: &str) -> Vec<Match<'_>> {
    ZIP_RE
        .find_iter(addr)
        .filter(|m| {
            addr.get(m.start().saturating_sub(3)..m.start())
                .is_some_and(|prefix| STATE_PREFIX_RE.is_match(prefix))
        })
        .collect()
}

/// Break a segment holding several concatenated addresses into one run per
/// state+ZIP boundary. Segments with zero or one boundary come back whole.
pub fn split_address(addr: &str) -> Vec<String> {
    let boundaries = state_zip_boundaries(addr);
    if boundaries.len() <= 1 {
        return vec![addr.trim().to_string()];
    }

    let mut start = 0;
    boundaries
        .iter()
        .map(|m| {
            let run = &addr[start..m.end()];
            start = m.end();
            run.trim_matches(|c: char| matches!(c, ' ' | ',' | '.')).to_string()
        })
        .collect()
}

pub fn split_all<S: AsRef<str>>(addrs: &[S]) -> Vec<String> {
    addrs.iter().flat_map(|a| split_address(a.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn splits_two_concatenated_addresses() {
        let addr = "456 Oak Ave, Anytown, CA 90210 789 Pine Rd, Anytown, CA 90211";
        assert_eq!(
            split_address(addr),
            vec!["456 Oak Ave, Anytown, CA 90210", "789 Pine Rd, Anytown, CA 90211"]
        );
    }

    #[test]
    fn single_boundary_is_kept_verbatim() {
        assert_eq!(split_address("  9 Oak St, Reno, NV 89501 "), vec!["9 Oak St, Reno, NV 89501"]);
    }

    #[test]
    fn zip_inside_street_number_is_not_a_boundary() {
        let addr = "12345 Main St, Suite 67890, Dallas, TX 75270";
        assert_eq!(state_zip_boundaries(addr).len(), 1);
        assert_eq!(split_address(addr), vec![addr]);
    }

    #[test]
    fn boundary_needs_exactly_one_space() {
        let addr = "A, CA  90210 B, CA 90211";
        assert_eq!(state_zip_boundaries(addr).len(), 1);
    }

    #[test]
    fn trims_separators_between_runs() {
        let addr = "1 Elm St, Dover, DE 19901-1234., 2 Oak St, Reno, NV 89501";
        assert_eq!(
            split_address(addr),
            vec!["1 Elm St, Dover, DE 19901-1234", "2 Oak St, Reno, NV 89501"]
        );
    }

    #[test]
    fn zip_at_start_of_string_is_not_a_boundary() {
        assert!(state_zip_boundaries("90210 is a ZIP").is_empty());
    }

    #[test]
    fn splits_three_way_after_repair() {
        let addr = "2228 Rayburn House Office Building, Washington, DC 20515 1201 Elm Street, Dallas, TX 75270 Suite 2210, Dallas, TX 75270";
        assert_eq!(
            split_address(addr),
            vec![
                "2228 Rayburn House Office Building, Washington, DC 20515",
                "1201 Elm Street, Dallas, TX 75270",
                "Suite 2210, Dallas, TX 75270",
            ]
        );
    }

    #[test]
    fn split_all_preserves_order() {
        let addrs = ["A, CA 90210 B, CA 90211", "C, NV 89501"];
        assert_eq!(split_all(&addrs), vec!["A, CA 90210", "B, CA 90211", "C, NV 89501"]);
    }

    proptest! {
        #[test]
        fn emits_one_candidate_per_boundary(
            parts in prop::collection::vec(("[a-z ]{1,10}", "[A-Z]{2}", 10000u32..99999), 2..6)
        ) {
            let addr = parts
                .iter()
                .map(|(street, state, zip)| format!("x{street}, {state} {zip}"))
                .collect::<Vec<_>>()
                .join(" ");
            let out = split_address(&addr);
            prop_assert_eq!(out.len(), parts.len());
            for ((_, state, zip), candidate) in parts.iter().zip(&out) {
                let suffix = format!("{state} {zip}");
                prop_assert!(candidate.ends_with(&suffix));
            }
            prop_assert_eq!(out.concat().replace([' ', ',', '.'], ""), addr.replace([' ', ',', '.'], ""));
        }
    }
}
