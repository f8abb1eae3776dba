/// Reattach continuation fragments: a segment starting with a comma was cut
/// out of the address before it, so it is appended to that one.
///
/// A leading fragment with nothing to attach to stands alone, comma removed,
/// even when nothing is left after the comma.
pub fn repair<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(segments.len());
    for seg in segments {
        let seg = seg.as_ref().trim();
        if !seg.starts_with(',') {
            merged.push(seg.to_string());
            continue;
        }
        let tail = strip_continuation(seg);
        match merged.last_mut() {
            Some(prev) => {
                if !tail.is_empty() {
                    prev.push(' ');
                    prev.push_str(tail);
                }
            }
            None => merged.push(tail.to_string()),
        }
    }
    merged
}

fn strip_continuation(seg: &str) -> &str {
    seg.trim_start_matches(|c: char| c == ',' || c.is_whitespace()).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn merges_continuation_into_previous() {
        let segs = ["1201 Elm Street, Dallas, TX 75270", ", Suite 2210, Dallas, TX 75270"];
        assert_eq!(
            repair(&segs),
            vec!["1201 Elm Street, Dallas, TX 75270 Suite 2210, Dallas, TX 75270"]
        );
    }

    #[test]
    fn leading_continuation_stands_alone() {
        let segs = [", Suite 2210, Dallas, TX 75270", "9 Oak St, Reno, NV 89501"];
        assert_eq!(repair(&segs), vec!["Suite 2210, Dallas, TX 75270", "9 Oak St, Reno, NV 89501"]);
    }

    #[test]
    fn comma_only_first_segment_is_kept_empty() {
        let segs = [" , ", "9 Oak St, Reno, NV 89501"];
        assert_eq!(repair(&segs), vec!["", "9 Oak St, Reno, NV 89501"]);
    }

    #[test]
    fn comma_only_continuation_leaves_previous_untouched() {
        let segs = ["9 Oak St, Reno, NV 89501", ","];
        assert_eq!(repair(&segs), vec!["9 Oak St, Reno, NV 89501"]);
    }

    #[test]
    fn chained_continuations_all_join_the_first() {
        let segs = ["A, ST 00001", ", B, ST 00002", " ,, C, ST 00003"];
        assert_eq!(repair(&segs), vec!["A, ST 00001 B, ST 00002 C, ST 00003"]);
    }

    #[test]
    fn other_segments_pass_through_in_order() {
        let segs = ["P, ST 00001", "O. Box 5, Juneau, AK 99802", "Suite 1, Reno, NV 89501"];
        assert_eq!(repair(&segs), segs.to_vec());
    }

    #[test]
    fn empty_input() {
        let segs: [&str; 0] = [];
        assert!(repair(&segs).is_empty());
    }

    proptest! {
        #[test]
        fn never_grows_and_never_starts_with_comma(segs in prop::collection::vec("[ ,A-Z0-9]{0,12}", 0..12)) {
            let out = repair(segs.as_slice());
            prop_assert!(out.len() <= segs.len());
            for seg in &out {
                prop_assert!(!seg.starts_with(','));
            }
        }
    }
}
