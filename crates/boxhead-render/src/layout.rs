//! Column widths and alignment for the text renderers.
//!
//! A [`Layout`] is computed once per render. Column widths start at the
//! widest of the label and the cells, then grow until every spanner label
//! fits over its run.

use boxhead::{Align, MatrixOptions, SpannerMatrix, Table};
use tracing::trace;

use crate::options::RenderOptions;
use crate::util::{display_width, looks_numeric};

/// A laid-out body column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutColumn {
    pub var: String,
    pub label: String,
    pub width: usize,
    pub align: Align,
}

/// Widths and alignment for every printed column, plus the spanner rows.
#[derive(Debug, Clone)]
pub struct Layout {
    /// The stub, labelled with the stubhead.
    pub stub: Option<LayoutColumn>,
    /// Identity of the row-group column, if any.
    pub group: Option<String>,
    pub columns: Vec<LayoutColumn>,
    /// Spanner rows only; the column-label row is drawn from `columns`.
    pub matrix: SpannerMatrix,
    pub separator_width: usize,
}

impl Layout {
    pub fn new(table: &Table, options: &RenderOptions) -> Layout {
        let matrix = table.print_matrix(MatrixOptions::default().omit_columns_row(true));
        let data = table.data();

        let cells_of = |var: &str| -> Vec<String> {
            data.column_values(var)
                .unwrap_or_default()
                .into_iter()
                .map(|cell| display_cell(cell, options))
                .collect()
        };

        let mut columns: Vec<LayoutColumn> = Vec::with_capacity(matrix.vars().len());
        for var in matrix.vars() {
            let Some(info) = table.boxhead().get(var) else {
                continue;
            };
            let cells = cells_of(var);
            let label = info.column_label().to_string();
            let label_width = if options.show_column_labels {
                display_width(&label)
            } else {
                0
            };
            let width = cells
                .iter()
                .map(|c| display_width(c))
                .fold(label_width, usize::max);
            let align = match info.align {
                Some(align) => align,
                None if table.options().auto_align && is_numeric_column(&cells) => Align::Right,
                None => Align::Left,
            };
            columns.push(LayoutColumn {
                var: var.clone(),
                label,
                width,
                align,
            });
        }

        let stub = table.boxhead().stub().map(|info| {
            let label = table.stubhead().unwrap_or_default().to_string();
            let width = cells_of(&info.var)
                .iter()
                .map(|c| display_width(c))
                .fold(display_width(&label), usize::max);
            LayoutColumn {
                var: info.var.clone(),
                label,
                width,
                align: Align::Left,
            }
        });

        let mut layout = Layout {
            stub,
            group: table.boxhead().row_group().map(|info| info.var.clone()),
            columns,
            matrix,
            separator_width: display_width(&options.separator),
        };
        layout.fit_spanners();
        layout
    }

    /// Width of a run of `len` columns starting at `start`, separators included.
    pub fn run_width(&self, start: usize, len: usize) -> usize {
        let end = (start + len).min(self.columns.len());
        let cols = &self.columns[start.min(end)..end];
        let gaps = cols.len().saturating_sub(1);
        cols.iter().map(|c| c.width).sum::<usize>() + gaps * self.separator_width
    }

    /// Width of a full line: stub, separators and every column.
    pub fn total_width(&self) -> usize {
        let body = self.run_width(0, self.columns.len());
        match &self.stub {
            Some(stub) if self.columns.is_empty() => stub.width,
            Some(stub) => stub.width + self.separator_width + body,
            None => body,
        }
    }

    fn fit_spanners(&mut self) {
        for row in 0..self.matrix.height() {
            let spans: Vec<(usize, usize, usize)> = self
                .matrix
                .row_spans(row)
                .into_iter()
                .filter_map(|span| {
                    span.label
                        .map(|label| (span.start, span.len, display_width(label)))
                })
                .collect();
            for (start, len, need) in spans {
                let have = self.run_width(start, len);
                if need > have {
                    if let Some(last) = self.columns.get_mut(start + len - 1) {
                        last.width += need - have;
                        trace!(var = %last.var, width = last.width, "widened for spanner");
                    }
                }
            }
        }
    }
}

/// Cell text as printed: empty cells show the null representation.
pub(crate) fn display_cell(cell: &str, options: &RenderOptions) -> String {
    if cell.is_empty() {
        options.null_repr.clone()
    } else {
        cell.to_string()
    }
}

fn is_numeric_column(cells: &[String]) -> bool {
    let mut filled = cells.iter().filter(|c| !c.trim().is_empty()).peekable();
    filled.peek().is_some() && filled.all(|c| looks_numeric(c))
}
