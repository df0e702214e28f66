//! Property-based tests for selector resolution.

use boxhead::Boxhead;
use boxhead_select::ColumnSelector;
use proptest::prelude::*;

fn boxhead_strategy() -> impl Strategy<Value = Boxhead> {
    prop::collection::hash_set("[a-c]{1,3}", 1..12)
        .prop_map(|names| Boxhead::from_vars(names).unwrap())
}

proptest! {
    /// A selector and its negation partition the columns.
    #[test]
    fn not_partitions_columns(boxhead in boxhead_strategy(), prefix in "[a-c]{0,2}") {
        let selected = ColumnSelector::starts_with(prefix.clone()).resolve(&boxhead).unwrap();
        let rest = ColumnSelector::starts_with(prefix).not().resolve(&boxhead).unwrap();

        prop_assert_eq!(selected.len() + rest.len(), boxhead.len());
        prop_assert!(selected.iter().all(|v| !rest.contains(v)));
    }

    /// Resolved lists never contain duplicates.
    #[test]
    fn union_is_duplicate_free(boxhead in boxhead_strategy(), a in "[a-c]", b in "[a-c]") {
        let vars = ColumnSelector::contains(a)
            .or(ColumnSelector::contains(b))
            .resolve(&boxhead)
            .unwrap();
        let mut deduped = vars.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), vars.len());
    }

    /// Intersection never selects more than either side.
    #[test]
    fn intersect_is_bounded(boxhead in boxhead_strategy(), a in "[a-c]", b in "[a-c]") {
        let left = ColumnSelector::contains(a.clone()).resolve(&boxhead).unwrap();
        let right = ColumnSelector::ends_with(b.clone()).resolve(&boxhead).unwrap();
        let both = ColumnSelector::contains(a)
            .and(ColumnSelector::ends_with(b))
            .resolve(&boxhead)
            .unwrap();
        prop_assert!(both.len() <= left.len().min(right.len()));
    }
}
