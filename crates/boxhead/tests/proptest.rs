//! Property-based tests for grouping, placement and column moves.

use boxhead::{seq_groups, Boxhead, MatrixOptions, MoveTarget, SpannerDef, Table, TableData};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn table() -> Table {
    Table::new(TableData::from_columns(NAMES).unwrap())
}

// Non-empty subsets of NAMES, in random order.
fn selection_strategy() -> impl Strategy<Value = Vec<String>> {
    Just(NAMES.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|names| (1..=names.len()).prop_map(move |n| names[..n].to_vec()))
}

proptest! {
    /// Expanding every (value, count) pair rebuilds the input.
    #[test]
    fn groups_reconstruct_input(seq in prop::collection::vec(0u8..4, 0..64)) {
        let rebuilt: Vec<u8> = seq_groups(seq.iter().copied())
            .flat_map(|(v, n)| std::iter::repeat(v).take(n))
            .collect();
        prop_assert_eq!(rebuilt, seq);
    }

    /// Neighbouring groups never hold equal values and counts are positive.
    #[test]
    fn groups_are_maximal(seq in prop::collection::vec(0u8..3, 0..64)) {
        let groups: Vec<(u8, usize)> = seq_groups(seq).collect();
        for pair in groups.windows(2) {
            prop_assert_ne!(pair[0].0, pair[1].0);
        }
        prop_assert!(groups.iter().all(|(_, n)| *n > 0));
    }

    /// Placed spanners never share a column with another on the same level.
    #[test]
    fn placement_keeps_levels_disjoint(
        selections in prop::collection::vec(selection_strategy(), 1..8),
        gather in any::<bool>(),
    ) {
        let mut table = table();
        for (i, columns) in selections.into_iter().enumerate() {
            let def = SpannerDef::new(format!("s{i}")).columns(columns).gather(gather);
            table = table.tab_spanner(def).unwrap();
            prop_assert!(table.spanners().levels_are_disjoint());
        }
        let matrix = table.print_matrix(MatrixOptions::default());
        prop_assert_eq!(matrix.height(), table.spanners().levels().len() + 1);
    }

    /// Moving is a permutation: nothing is lost or duplicated.
    #[test]
    fn move_is_a_permutation(columns in selection_strategy(), anchor in 0usize..6) {
        let boxhead = Boxhead::from_vars(NAMES).unwrap();
        let moved = boxhead
            .moved(&columns.clone().into(), &MoveTarget::After(NAMES[anchor].to_string()))
            .unwrap();

        let mut before = boxhead.vars();
        let mut after = moved.vars();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Gathering makes the selected columns contiguous.
    #[test]
    fn gather_makes_contiguous(columns in selection_strategy()) {
        let boxhead = Boxhead::from_vars(NAMES).unwrap();
        let gathered = boxhead.gathered(&columns.clone().into()).unwrap();
        let positions: Vec<usize> = columns
            .iter()
            .map(|c| gathered.position(c).unwrap())
            .collect();
        let min = *positions.iter().min().unwrap();
        let max = *positions.iter().max().unwrap();
        prop_assert_eq!(max - min + 1, columns.len());
    }
}
