use proptest::prelude::*;

use psykit_bundle::{dedupe_text, normalize_key};

proptest! {
    #[test]
    fn dedupe_is_idempotent(xs in prop::collection::vec("[ aAbB\t]{0,6}", 0..20)) {
        let once = dedupe_text(&xs);
        prop_assert_eq!(dedupe_text(&once), once);
    }

    #[test]
    fn dedupe_output_is_an_ordered_subsequence_with_unique_keys(
        xs in prop::collection::vec("[ aAbB]{0,4}", 0..20)
    ) {
        let out = dedupe_text(&xs);

        let mut cursor = 0;
        for kept in &out {
            let pos = xs[cursor..].iter().position(|x| x == kept);
            prop_assert!(pos.is_some());
            cursor += pos.unwrap_or(0) + 1;
        }

        let mut keys: Vec<String> = out.iter().map(|s| normalize_key(s)).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }
}
