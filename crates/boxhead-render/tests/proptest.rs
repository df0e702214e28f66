//! Property-based tests for the text layout.

use boxhead::{SpannerDef, Table, TableData};
use boxhead_render::{display_width, render, Layout, OutputMode, RenderOptions};
use proptest::prelude::*;

fn table_strategy() -> impl Strategy<Value = (Table, String)> {
    (
        prop::collection::vec("[a-z ]{0,8}", 3),
        prop::collection::vec(prop::collection::vec("[a-z0-9]{0,6}", 3), 0..5),
        "[A-Za-z ]{1,30}",
    )
        .prop_map(|(labels, rows, spanner)| {
            let data = TableData::new(["x", "y", "z"], rows).unwrap();
            let labels = [
                ("x", labels[0].clone()),
                ("y", labels[1].clone()),
                ("z", labels[2].clone()),
            ];
            let table = Table::new(data)
                .cols_label(labels)
                .unwrap()
                .tab_spanner(SpannerDef::new(spanner.clone()).columns(["x", "y"]))
                .unwrap();
            (table, spanner)
        })
}

proptest! {
    /// No rendered line is wider than the layout's total width.
    #[test]
    fn lines_fit_total_width((table, _) in table_strategy()) {
        let options = RenderOptions::default();
        let total = Layout::new(&table, &options).total_width();
        let out = render(&table, OutputMode::Text, &options).unwrap();
        for line in out.lines() {
            prop_assert!(display_width(line) <= total, "{:?} wider than {}", line, total);
        }
    }

    /// Every spanner label fits over the columns it spans.
    #[test]
    fn spanner_label_fits_run((table, spanner) in table_strategy()) {
        let layout = Layout::new(&table, &RenderOptions::default());
        prop_assert!(layout.run_width(0, 2) >= display_width(&spanner));
    }
}
