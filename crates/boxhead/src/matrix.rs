//! The spanner print matrix.
//!
//! [`spanners_print_matrix`] projects the spanner registry onto the visible
//! columns as a row-major grid, top spanner level first, optionally followed
//! by the column-label row. Renderers walk the grid row by row; each spanner
//! run shows up as one [`MatrixCell::Label`] followed by
//! [`MatrixCell::Continuation`] cells.
//!
//! ```rust
//! use boxhead::{spanners_print_matrix, Boxhead, MatrixCell, MatrixOptions, SpannerInfo, Spanners};
//!
//! let boxhead = Boxhead::from_vars(["a", "b", "c"]).unwrap();
//! let spanners = Spanners::new([SpannerInfo::new("ab", 0, ["a", "b"])]);
//!
//! let matrix = spanners_print_matrix(&spanners, &boxhead, MatrixOptions::default());
//! assert_eq!(matrix.height(), 2);
//! assert_eq!(
//!     matrix.rows()[0],
//!     vec![MatrixCell::label("ab"), MatrixCell::Continuation, MatrixCell::Empty]
//! );
//! ```

use serde::Serialize;

use crate::boxhead::Boxhead;
use crate::column::ColumnKind;
use crate::seq::seq_groups;
use crate::spanner::Spanners;

/// One cell of the print matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixCell {
    /// No spanner covers this column at this level.
    Empty,
    /// First column of a run: the spanner's built label, or a column label.
    Label(String),
    /// Later column of the same run as the cell to its left.
    Continuation,
}

impl MatrixCell {
    pub fn label(text: impl Into<String>) -> Self {
        MatrixCell::Label(text.into())
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            MatrixCell::Label(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A horizontal run of cells in one matrix row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    /// Label shown over the run; `None` for an uncovered column.
    pub label: Option<&'a str>,
    /// Index into [`SpannerMatrix::vars`] of the first column.
    pub start: usize,
    /// Number of columns covered.
    pub len: usize,
}

/// Flags for [`spanners_print_matrix`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatrixOptions {
    /// Leave out the final column-label row.
    pub omit_columns_row: bool,
    /// Keep hidden columns in the projection.
    pub include_hidden: bool,
}

impl MatrixOptions {
    pub fn omit_columns_row(mut self, omit: bool) -> Self {
        self.omit_columns_row = omit;
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

/// Row-major header grid plus the columns it was built over.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpannerMatrix {
    rows: Vec<Vec<MatrixCell>>,
    vars: Vec<String>,
}

impl SpannerMatrix {
    pub fn rows(&self) -> &[Vec<MatrixCell>] {
        &self.rows
    }

    /// Column identities, one per cell in every row.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `row` for column `var`.
    pub fn cell(&self, row: usize, var: &str) -> Option<&MatrixCell> {
        let col = self.vars.iter().position(|v| v == var)?;
        self.rows.get(row)?.get(col)
    }

    /// Split a row into runs: a label and its continuations form one span,
    /// every empty cell is a span of its own.
    pub fn row_spans(&self, row: usize) -> Vec<Span<'_>> {
        let mut spans: Vec<Span<'_>> = Vec::new();
        let Some(cells) = self.rows.get(row) else {
            return spans;
        };
        for (i, cell) in cells.iter().enumerate() {
            match cell {
                MatrixCell::Continuation if !spans.is_empty() => {
                    if let Some(last) = spans.last_mut() {
                        last.len += 1;
                    }
                }
                MatrixCell::Label(text) => spans.push(Span {
                    label: Some(text.as_str()),
                    start: i,
                    len: 1,
                }),
                _ => spans.push(Span {
                    label: None,
                    start: i,
                    len: 1,
                }),
            }
        }
        spans
    }
}

/// Build the print matrix for `spanners` over `boxhead`.
///
/// Stub and row-group columns are never part of the matrix. Hidden columns
/// are dropped unless `options.include_hidden` is set. With no spanners the
/// result is [`empty_spanner_matrix`].
pub fn spanners_print_matrix(
    spanners: &Spanners,
    boxhead: &Boxhead,
    options: MatrixOptions,
) -> SpannerMatrix {
    let vars: Vec<String> = boxhead
        .iter()
        .filter(|c| !c.is_stub_like())
        .filter(|c| options.include_hidden || c.kind != ColumnKind::Hidden)
        .map(|c| c.var.clone())
        .collect();

    if spanners.is_empty() {
        return empty_spanner_matrix(vars, options.omit_columns_row);
    }

    let mut rows: Vec<Vec<MatrixCell>> = Vec::new();
    for level in spanners.levels().into_iter().rev() {
        let owners = vars.iter().map(|var| {
            spanners
                .at_level(level)
                .find(|s| s.covers(var))
                .map(|s| s.spanner_id.as_str())
        });

        let mut row: Vec<MatrixCell> = Vec::with_capacity(vars.len());
        for (owner, len) in seq_groups(owners) {
            match owner.and_then(|id| spanners.get(id)) {
                Some(spanner) => {
                    row.push(MatrixCell::label(spanner.built_label()));
                    row.extend(std::iter::repeat(MatrixCell::Continuation).take(len - 1));
                }
                None => row.extend(std::iter::repeat(MatrixCell::Empty).take(len)),
            }
        }
        tracing::trace!(level, cells = row.len(), "built spanner row");
        rows.push(row);
    }

    if !options.omit_columns_row {
        rows.push(columns_row(&vars));
    }
    SpannerMatrix { rows, vars }
}

/// The matrix for a table without spanners: no rows, or only the column
/// labels.
pub fn empty_spanner_matrix(vars: Vec<String>, omit_columns_row: bool) -> SpannerMatrix {
    let rows = if omit_columns_row {
        Vec::new()
    } else {
        vec![columns_row(&vars)]
    };
    SpannerMatrix { rows, vars }
}

fn columns_row(vars: &[String]) -> Vec<MatrixCell> {
    vars.iter().map(|v| MatrixCell::label(v.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnInfo;
    use crate::spanner::SpannerInfo;

    fn spanners() -> Spanners {
        Spanners::new([
            SpannerInfo::new("a", 0, ["col1"]).built("A"),
            SpannerInfo::new("b", 1, ["col2"]).built("B"),
        ])
    }

    fn boxhead() -> Boxhead {
        Boxhead::new([
            ColumnInfo::new("col1"),
            ColumnInfo::new("col2"),
            ColumnInfo::new("col3"),
            ColumnInfo::new("col4").kind(ColumnKind::Hidden),
        ])
        .unwrap()
    }

    fn l(s: &str) -> MatrixCell {
        MatrixCell::label(s)
    }

    const E: MatrixCell = MatrixCell::Empty;
    const C: MatrixCell = MatrixCell::Continuation;

    #[test]
    fn test_print_matrix() {
        let mat = spanners_print_matrix(&spanners(), &boxhead(), MatrixOptions::default());
        assert_eq!(mat.vars(), ["col1", "col2", "col3"]);
        assert_eq!(
            mat.rows(),
            [
                vec![E, l("B"), E],
                vec![l("A"), E, E],
                vec![l("col1"), l("col2"), l("col3")],
            ]
        );
    }

    #[test]
    fn test_print_matrix_omit_columns_row() {
        let opts = MatrixOptions::default().omit_columns_row(true);
        let mat = spanners_print_matrix(&spanners(), &boxhead(), opts);
        assert_eq!(mat.vars(), ["col1", "col2", "col3"]);
        assert_eq!(mat.rows(), [vec![E, l("B"), E], vec![l("A"), E, E]]);
    }

    #[test]
    fn test_print_matrix_include_hidden() {
        let opts = MatrixOptions::default().include_hidden(true);
        let mat = spanners_print_matrix(&spanners(), &boxhead(), opts);
        assert_eq!(mat.vars(), ["col1", "col2", "col3", "col4"]);
        assert_eq!(
            mat.rows(),
            [
                vec![E, l("B"), E, E],
                vec![l("A"), E, E, E],
                vec![l("col1"), l("col2"), l("col3"), l("col4")],
            ]
        );
    }

    #[test]
    fn test_print_matrix_excludes_stub() {
        let spanners = Spanners::new([SpannerInfo::new("a", 0, ["x", "y"]).built("A")]);
        let boxhead = Boxhead::new([
            ColumnInfo::new("x"),
            ColumnInfo::new("y").kind(ColumnKind::Stub),
        ])
        .unwrap();

        let opts = MatrixOptions::default().omit_columns_row(true);
        let mat = spanners_print_matrix(&spanners, &boxhead, opts);
        assert_eq!(mat.vars(), ["x"]);
        assert_eq!(mat.rows(), [vec![l("A")]]);
    }

    #[test]
    fn test_contiguous_run_labels_once() {
        let spanners = Spanners::new([SpannerInfo::new("s", 0, ["a", "b", "c"]).built("S")]);
        let boxhead = Boxhead::from_vars(["a", "b", "c", "d"]).unwrap();
        let opts = MatrixOptions::default().omit_columns_row(true);
        let mat = spanners_print_matrix(&spanners, &boxhead, opts);
        assert_eq!(mat.rows(), [vec![l("S"), C, C, E]]);
    }

    #[test]
    fn test_split_spanner_labels_every_run() {
        let spanners = Spanners::new([SpannerInfo::new("s", 0, ["a", "c", "d"]).built("S")]);
        let boxhead = Boxhead::from_vars(["a", "b", "c", "d"]).unwrap();
        let opts = MatrixOptions::default().omit_columns_row(true);
        let mat = spanners_print_matrix(&spanners, &boxhead, opts);
        assert_eq!(mat.rows(), [vec![l("S"), E, l("S"), C]]);
    }

    #[test]
    fn test_adjacent_spanners_with_equal_labels_stay_apart() {
        let spanners = Spanners::new([
            SpannerInfo::new("one", 0, ["a"]).built("Same"),
            SpannerInfo::new("two", 0, ["b"]).built("Same"),
        ]);
        let boxhead = Boxhead::from_vars(["a", "b"]).unwrap();
        let opts = MatrixOptions::default().omit_columns_row(true);
        let mat = spanners_print_matrix(&spanners, &boxhead, opts);
        assert_eq!(mat.rows(), [vec![l("Same"), l("Same")]]);
    }

    #[test]
    fn test_sparse_levels_collapse_to_rows() {
        let spanners = Spanners::new([
            SpannerInfo::new("low", 0, ["a"]),
            SpannerInfo::new("high", 3, ["b"]),
        ]);
        let boxhead = Boxhead::from_vars(["a", "b"]).unwrap();
        let mat = spanners_print_matrix(&spanners, &boxhead, MatrixOptions::default());
        assert_eq!(mat.height(), 3);
        assert_eq!(mat.rows()[0], vec![E, l("high")]);
    }

    #[test]
    fn test_empty_spanner_matrix() {
        let mat = empty_spanner_matrix(vec!["a".into(), "b".into()], false);
        assert_eq!(mat.vars(), ["a", "b"]);
        assert_eq!(mat.rows(), [vec![l("a"), l("b")]]);
    }

    #[test]
    fn test_empty_spanner_matrix_omit_columns_row() {
        let mat = empty_spanner_matrix(vec!["a".into(), "b".into()], true);
        assert_eq!(mat.vars(), ["a", "b"]);
        assert!(mat.rows().is_empty());
    }

    #[test]
    fn test_row_spans() {
        let spanners = Spanners::new([SpannerInfo::new("s", 0, ["b", "c"]).built("S")]);
        let boxhead = Boxhead::from_vars(["a", "b", "c"]).unwrap();
        let mat = spanners_print_matrix(&spanners, &boxhead, MatrixOptions::default());

        assert_eq!(
            mat.row_spans(0),
            vec![
                Span { label: None, start: 0, len: 1 },
                Span { label: Some("S"), start: 1, len: 2 },
            ]
        );
        assert_eq!(mat.row_spans(1).len(), 3);
        assert!(mat.row_spans(7).is_empty());
        assert_eq!(mat.cell(0, "c"), Some(&MatrixCell::Continuation));
    }
}
