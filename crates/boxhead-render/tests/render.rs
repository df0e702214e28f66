//! Rendering of whole tables in every output mode.

use boxhead::{SpannerDef, Table, TableData};
use boxhead_render::{
    render, render_with_styles, HeadingStyles, OutputMode, RenderOptions,
};
use insta::assert_snapshot;

fn fruit() -> Table {
    let data = TableData::new(
        ["row", "group", "num", "char", "fctr"],
        [
            ["row_1", "grp_a", "0.1", "apricot", "one"],
            ["row_2", "grp_a", "2.2", "banana", "two"],
            ["row_3", "grp_b", "33.3", "", "three"],
        ],
    )
    .unwrap();

    Table::builder(data)
        .rowname_col("row")
        .groupname_col("group")
        .build()
        .unwrap()
        .tab_header(boxhead::Heading::new("Fruit").subtitle("sample"))
        .tab_stubhead("item")
        .tab_spanner(SpannerDef::new("Values").columns(["char", "fctr"]))
        .unwrap()
        .tab_spanner(SpannerDef::new("All").columns("num").spanner("Values"))
        .unwrap()
        .tab_source_note("Source: made up")
}

#[test]
fn text_output() {
    let out = render(&fruit(), OutputMode::Text, &RenderOptions::default()).unwrap();
    assert_snapshot!(out, @r"
           Fruit
          sample
               All
       --------------------
                 Values
             --------------
item    num  char     fctr
===========================
grp_a
row_1   0.1  apricot  one
row_2   2.2  banana   two
grp_b
row_3  33.3           three
Source: made up
");
}

#[test]
fn csv_output() {
    let out = render(&fruit(), OutputMode::Csv, &RenderOptions::default()).unwrap();
    assert_snapshot!(out, @r"
,,All,,
,,,Values,
group,item,num,char,fctr
grp_a,row_1,0.1,apricot,one
grp_a,row_2,2.2,banana,two
grp_b,row_3,33.3,,three
");
}

#[test]
fn term_output_matches_text_without_escapes() {
    let options = RenderOptions::default();
    let styles = HeadingStyles::default().force_styling(true);
    let styled = render_with_styles(&fruit(), OutputMode::Term, &options, &styles).unwrap();
    let plain = render(&fruit(), OutputMode::Text, &options).unwrap();

    assert!(styled.contains("\x1b["));
    let stripped: Vec<String> = console::strip_ansi_codes(&styled)
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    let plain: Vec<&str> = plain.lines().collect();
    assert_eq!(stripped, plain);
}

#[test]
fn text_mode_ignores_styles() {
    let styles = HeadingStyles::default().force_styling(true);
    let options = RenderOptions::default();
    let out = render_with_styles(&fruit(), OutputMode::Text, &options, &styles).unwrap();
    assert!(!out.contains('\x1b'));
    assert_eq!(out, render(&fruit(), OutputMode::Text, &options).unwrap());
}

#[test]
fn hidden_columns_and_widths() {
    let table = fruit()
        .cols_hide("char")
        .unwrap()
        .cols_width([("num", "200px")])
        .unwrap();
    let out = render(&table, OutputMode::Text, &RenderOptions::default()).unwrap();

    assert!(!out.contains("apricot"));
    assert!(out.contains("row_3  33.3  three"));
    assert!(!out.contains("200px"));
}

#[test]
fn custom_rules_and_null_repr() {
    let data = TableData::new(["a", "b"], [["x", ""]]).unwrap();
    let table = Table::new(data)
        .tab_spanner(SpannerDef::new("AB").columns(["a", "b"]))
        .unwrap();
    let options = RenderOptions::default()
        .separator(" | ")
        .spanner_rule("~")
        .heading_rule("-")
        .null_repr("NA");

    let out = render(&table, OutputMode::Text, &options).unwrap();
    assert_eq!(out, "  AB\n~~~~~~\na | b\n------\nx | NA\n");
}

#[test]
fn column_labels_can_be_left_out() {
    let data = TableData::new(["a", "b"], [["1", "2"]]).unwrap();
    let options = RenderOptions::default().show_column_labels(false);
    let out = render(&Table::new(data), OutputMode::Text, &options).unwrap();
    assert_eq!(out, "====\n1  2\n");
}

#[test]
fn ragged_json_is_rejected_before_rendering() {
    let payload = r#"{"data":{"columns":["a","b"],"rows":[["1"]]},"boxhead":[{"var":"a"},{"var":"b"}],"spanners":[]}"#;
    let err = serde_json::from_str::<Table>(payload).unwrap_err();
    assert!(err.to_string().contains("row 0 has 1 cells, expected 2"));

    let payload = r#"{"data":{"columns":["a","b"],"rows":[["1","2"]]},"boxhead":[{"var":"a"},{"var":"b"}],"spanners":[]}"#;
    let table: Table = serde_json::from_str(payload).unwrap();
    let out = render(&table, OutputMode::Text, &RenderOptions::default()).unwrap();
    assert_eq!(out, "a  b
====
1  2
");
}

#[test]
fn json_round_trips() {
    let table = fruit();
    let out = render(&table, OutputMode::Json, &RenderOptions::default()).unwrap();
    let back: Table = serde_json::from_str(&out).unwrap();
    assert_eq!(back, table);
}
