//! Plain and styled text output.

use boxhead::{Align, Table};
use console::Style;

use crate::layout::{display_cell, Layout};
use crate::options::RenderOptions;
use crate::styles::HeadingStyles;
use crate::util::{pad, rule};

/// Render `table` as aligned text. `styles` is applied when present.
pub fn render_text(
    table: &Table,
    options: &RenderOptions,
    styles: Option<&HeadingStyles>,
) -> String {
    let layout = Layout::new(table, options);
    let writer = TextWriter {
        table,
        options,
        styles,
        layout: &layout,
    };
    let lines = writer.lines();
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

struct TextWriter<'a> {
    table: &'a Table,
    options: &'a RenderOptions,
    styles: Option<&'a HeadingStyles>,
    layout: &'a Layout,
}

impl TextWriter<'_> {
    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let total = self.layout.total_width();

        if let Some(heading) = self.table.heading() {
            let title = pad(&heading.title, total, Align::Center);
            lines.push(self.paint(|s| &s.title, title.trim_end()));
            if let Some(subtitle) = &heading.subtitle {
                let subtitle = pad(subtitle, total, Align::Center);
                lines.push(self.paint(|s| &s.subtitle, subtitle.trim_end()));
            }
        }

        for row in 0..self.layout.matrix.height() {
            self.spanner_lines(row, &mut lines);
        }

        if self.options.show_column_labels {
            let mut pieces: Vec<String> = Vec::new();
            if let Some(stub) = &self.layout.stub {
                let label = pad(&stub.label, stub.width, Align::Left);
                pieces.push(self.paint(|s| &s.column_label, &label));
            }
            for col in &self.layout.columns {
                let label = pad(&col.label, col.width, col.align);
                pieces.push(self.paint(|s| &s.column_label, &label));
            }
            lines.push(self.join(pieces));
        }

        lines.push(rule(&self.options.heading_rule, total).trim_end().to_string());

        for (group, rows) in self.row_groups() {
            if let Some(group) = group {
                lines.push(self.paint(|s| &s.row_group, &group));
            }
            for row in rows {
                lines.push(self.body_line(row));
            }
        }

        for note in self.table.source_notes() {
            lines.push(self.paint(|s| &s.source_note, note));
        }
        lines
    }

    fn spanner_lines(&self, row: usize, lines: &mut Vec<String>) {
        let mut labels: Vec<String> = Vec::new();
        let mut rules: Vec<String> = Vec::new();
        if let Some(stub) = &self.layout.stub {
            labels.push(" ".repeat(stub.width));
            rules.push(" ".repeat(stub.width));
        }
        for span in self.layout.matrix.row_spans(row) {
            let width = self.layout.run_width(span.start, span.len);
            match span.label {
                Some(label) => {
                    let label = pad(label, width, Align::Center);
                    labels.push(self.paint(|s| &s.spanner, &label));
                    rules.push(rule(&self.options.spanner_rule, width));
                }
                None => {
                    labels.push(" ".repeat(width));
                    rules.push(" ".repeat(width));
                }
            }
        }
        lines.push(self.join(labels));
        lines.push(self.join(rules));
    }

    fn body_line(&self, row: usize) -> String {
        let data = self.table.data();
        let cell = |var: &str| display_cell(data.cell(row, var).unwrap_or_default(), self.options);

        let mut pieces: Vec<String> = Vec::new();
        if let Some(stub) = &self.layout.stub {
            let text = pad(&cell(&stub.var), stub.width, Align::Left);
            pieces.push(self.paint(|s| &s.stub, &text));
        }
        for col in &self.layout.columns {
            pieces.push(pad(&cell(&col.var), col.width, col.align));
        }
        self.join(pieces)
    }

    /// Row indices grouped by the row-group column, groups in order of first
    /// appearance. Without a row-group column there is one unlabelled group.
    fn row_groups(&self) -> Vec<(Option<String>, Vec<usize>)> {
        let data = self.table.data();
        let all: Vec<usize> = (0..data.n_rows()).collect();
        let Some(var) = &self.layout.group else {
            return vec![(None, all)];
        };

        let mut groups: Vec<(Option<String>, Vec<usize>)> = Vec::new();
        for row in all {
            let value = display_cell(data.cell(row, var).unwrap_or_default(), self.options);
            match groups
                .iter_mut()
                .find(|(name, _)| name.as_deref() == Some(value.as_str()))
            {
                Some((_, rows)) => rows.push(row),
                None => groups.push((Some(value), vec![row])),
            }
        }
        groups
    }

    fn join(&self, pieces: Vec<String>) -> String {
        pieces.join(&self.options.separator).trim_end().to_string()
    }

    fn paint(&self, pick: impl Fn(&HeadingStyles) -> &Style, text: &str) -> String {
        match self.styles {
            Some(styles) => pick(styles).apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}
