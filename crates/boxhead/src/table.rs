//! The table aggregate and its directives.
//!
//! A [`Table`] is an immutable snapshot. Every directive borrows the current
//! snapshot and returns a new one, copying the slots it does not touch:
//!
//! ```rust
//! use boxhead::{SpannerDef, Table, TableData};
//!
//! let data = TableData::from_columns(["a", "b", "c"]).unwrap();
//! let table = Table::new(data);
//!
//! let spanned = table
//!     .tab_spanner(SpannerDef::new("A and C").columns(["a", "c"]))
//!     .unwrap();
//!
//! assert_eq!(spanned.boxhead().vars(), ["a", "c", "b"]);
//! assert_eq!(table.boxhead().vars(), ["a", "b", "c"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boxhead::Boxhead;
use crate::column::{Align, ColumnKind};
use crate::data::TableData;
use crate::error::{BoxheadError, Result};
use crate::matrix::{spanners_print_matrix, MatrixOptions, SpannerMatrix};
use crate::options::{SelectionPolicy, TableOptions};
use crate::selection::{Columns, MoveTarget};
use crate::spanner::{SpannerInfo, Spanners};

/// Title and optional subtitle shown above the column headings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
}

impl Heading {
    pub fn new(title: impl Into<String>) -> Self {
        Heading {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl From<&str> for Heading {
    fn from(title: &str) -> Self {
        Heading::new(title)
    }
}

impl From<String> for Heading {
    fn from(title: String) -> Self {
        Heading::new(title)
    }
}

/// Arguments for [`Table::tab_spanner`].
///
/// The spanner covers the union of `columns` and the columns of every
/// referenced spanner. Its id defaults to the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannerDef {
    label: String,
    id: Option<String>,
    columns: Columns,
    spanners: Vec<String>,
    level: Option<usize>,
    gather: bool,
}

impl SpannerDef {
    pub fn new(label: impl Into<String>) -> Self {
        SpannerDef {
            label: label.into(),
            id: None,
            columns: Columns::none(),
            spanners: Vec::new(),
            level: None,
            gather: true,
        }
    }

    /// Use an id different from the label.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Columns to span.
    pub fn columns(mut self, columns: impl Into<Columns>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Span everything the given spanners span, one level above them.
    pub fn spanners<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.spanners = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single referenced spanner.
    pub fn spanner(mut self, id: impl Into<String>) -> Self {
        self.spanners.push(id.into());
        self
    }

    /// Force the level instead of computing it.
    pub fn level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    /// Whether to make the spanned columns contiguous (default `true`).
    pub fn gather(mut self, gather: bool) -> Self {
        self.gather = gather;
        self
    }
}

/// An immutable table snapshot.
///
/// Deserialized snapshots are checked: every boxhead column must exist in
/// the data and every spanner must cover known columns only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableFields")]
pub struct Table {
    data: TableData,
    boxhead: Boxhead,
    spanners: Spanners,
    stubhead: Option<String>,
    heading: Option<Heading>,
    source_notes: Vec<String>,
    locale: Option<String>,
    options: TableOptions,
}

#[derive(Deserialize)]
struct TableFields {
    data: TableData,
    boxhead: Boxhead,
    spanners: Spanners,
    #[serde(default)]
    stubhead: Option<String>,
    #[serde(default)]
    heading: Option<Heading>,
    #[serde(default)]
    source_notes: Vec<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    options: TableOptions,
}

impl TryFrom<TableFields> for Table {
    type Error = BoxheadError;

    fn try_from(fields: TableFields) -> Result<Self> {
        if let Some(info) = fields
            .boxhead
            .iter()
            .find(|info| !fields.data.columns().contains(&info.var))
        {
            return Err(BoxheadError::unknown_column(info.var.as_str()));
        }
        for spanner in &fields.spanners {
            if let Some(var) = spanner.vars.iter().find(|v| !fields.boxhead.contains(v)) {
                return Err(BoxheadError::unknown_column(var.as_str()));
            }
        }
        Ok(Table {
            data: fields.data,
            boxhead: fields.boxhead,
            spanners: fields.spanners,
            stubhead: fields.stubhead,
            heading: fields.heading,
            source_notes: fields.source_notes,
            locale: fields.locale,
            options: fields.options,
        })
    }
}

impl Table {
    /// A table whose columns are all default-kind, in data order.
    ///
    /// `TableData` guarantees unique column names, so the boxhead built from
    /// them needs no further checks.
    pub fn new(data: TableData) -> Self {
        let boxhead = Boxhead::from_data(&data);
        Table {
            data,
            boxhead,
            ..Default::default()
        }
    }

    pub fn builder(data: TableData) -> TableBuilder {
        TableBuilder::new(data)
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn boxhead(&self) -> &Boxhead {
        &self.boxhead
    }

    pub fn spanners(&self) -> &Spanners {
        &self.spanners
    }

    pub fn stubhead(&self) -> Option<&str> {
        self.stubhead.as_deref()
    }

    pub fn heading(&self) -> Option<&Heading> {
        self.heading.as_ref()
    }

    pub fn source_notes(&self) -> &[String] {
        &self.source_notes
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// A copy with the column registry replaced.
    pub fn with_boxhead(&self, boxhead: Boxhead) -> Table {
        Table {
            boxhead,
            ..self.clone()
        }
    }

    /// A copy with the spanner registry replaced.
    pub fn with_spanners(&self, spanners: Spanners) -> Table {
        Table {
            spanners,
            ..self.clone()
        }
    }

    /// A copy with different options.
    pub fn with_options(&self, options: TableOptions) -> Table {
        Table {
            options,
            ..self.clone()
        }
    }

    /// Add a spanner over columns and/or other spanners.
    ///
    /// Without an explicit level, a spanner over plain columns goes on the
    /// lowest level where it overlaps nothing. A spanner over other spanners
    /// goes on the lowest such level above all of them.
    ///
    /// Gathering only applies to spanners over plain columns. Moving columns
    /// for a spanner over spanners could split runs already placed below it.
    pub fn tab_spanner(&self, def: SpannerDef) -> Result<Table> {
        let SpannerDef {
            label,
            id,
            columns,
            spanners: spanner_ids,
            level,
            gather,
        } = def;
        let spanner_id = id.unwrap_or_else(|| label.clone());

        if self.spanners.get(&spanner_id).is_some() {
            return Err(BoxheadError::DuplicateSpanner { id: spanner_id });
        }
        self.boxhead.check_columns(&columns)?;
        let spanned = self.spanners.vars_of(spanner_ids.as_slice())?;

        let vars: Columns = columns
            .into_vec()
            .into_iter()
            .chain(spanned)
            .collect::<Columns>()
            .dedup();
        if vars.is_empty() {
            return self.on_empty_selection("tab_spanner");
        }

        let level = match level {
            Some(level) => level,
            None => {
                let children_top = spanner_ids
                    .iter()
                    .filter_map(|id| self.spanners.get(id))
                    .map(|s| s.spanner_level)
                    .max();
                match children_top {
                    Some(top) => self.spanners.next_level_from(vars.as_slice(), top + 1),
                    None => self.spanners.next_level(vars.as_slice()),
                }
            }
        };

        let boxhead = if gather && spanner_ids.is_empty() {
            self.boxhead.gathered(&vars)?
        } else {
            self.boxhead.clone()
        };

        debug!(
            spanner_id = %spanner_id,
            level,
            columns = ?vars.as_slice(),
            gather,
            "added spanner"
        );

        let spanner = SpannerInfo {
            spanner_id,
            spanner_level: level,
            spanner_label: label,
            vars: vars.into_vec(),
            built: None,
        };
        Ok(Table {
            boxhead,
            spanners: self.spanners.append(spanner),
            ..self.clone()
        })
    }

    /// Move `columns` after the `after` anchor (or to the start/end).
    ///
    /// An anchor among `columns` stays in place. When it is the only column
    /// selected nothing moves, and the empty-selection policy applies.
    pub fn cols_move(
        &self,
        columns: impl Into<Columns>,
        after: impl Into<MoveTarget>,
    ) -> Result<Table> {
        let columns = columns.into();
        let target = after.into();
        if columns.is_empty() {
            return self.on_empty_selection("cols_move");
        }
        let boxhead = self.boxhead.moved(&columns, &target)?;
        if let MoveTarget::After(anchor) = &target {
            if columns.iter().all(|var| var == anchor) {
                return self.on_empty_selection("cols_move");
            }
        }
        debug!(columns = ?columns.as_slice(), target = ?target, "moved columns");
        Ok(self.with_boxhead(boxhead))
    }

    /// Move `columns` to the start of the table.
    pub fn cols_move_to_start(&self, columns: impl Into<Columns>) -> Result<Table> {
        self.cols_move(columns, MoveTarget::Start)
    }

    /// Move `columns` to the end of the table.
    pub fn cols_move_to_end(&self, columns: impl Into<Columns>) -> Result<Table> {
        self.cols_move(columns, MoveTarget::End)
    }

    /// Hide `columns`. They stay in the registry with their metadata.
    pub fn cols_hide(&self, columns: impl Into<Columns>) -> Result<Table> {
        let columns = columns.into();
        if columns.is_empty() {
            return self.on_empty_selection("cols_hide");
        }
        let boxhead = self.boxhead.hidden(&columns)?;
        debug!(columns = ?columns.as_slice(), "hid columns");
        Ok(self.with_boxhead(boxhead))
    }

    /// Set widths (`"120px"`, `"25%"`) for the named columns only.
    pub fn cols_width<K, V>(&self, widths: impl IntoIterator<Item = (K, V)>) -> Result<Table>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let boxhead = self.boxhead.with_widths(widths)?;
        debug!("set column widths");
        Ok(self.with_boxhead(boxhead))
    }

    /// Relabel the named columns.
    pub fn cols_label<K, V>(&self, labels: impl IntoIterator<Item = (K, V)>) -> Result<Table>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let boxhead = self.boxhead.with_labels(labels)?;
        Ok(self.with_boxhead(boxhead))
    }

    /// Align `columns`.
    pub fn cols_align(&self, align: Align, columns: impl Into<Columns>) -> Result<Table> {
        let columns = columns.into();
        if columns.is_empty() {
            return self.on_empty_selection("cols_align");
        }
        let boxhead = self.boxhead.with_align(&columns, align)?;
        Ok(self.with_boxhead(boxhead))
    }

    /// Label the stubhead, the cell above the stub.
    pub fn tab_stubhead(&self, label: impl Into<String>) -> Table {
        Table {
            stubhead: Some(label.into()),
            ..self.clone()
        }
    }

    /// Append a source note below the table.
    pub fn tab_source_note(&self, note: impl Into<String>) -> Table {
        let mut source_notes = self.source_notes.clone();
        source_notes.push(note.into());
        Table {
            source_notes,
            ..self.clone()
        }
    }

    /// Set the title and subtitle.
    pub fn tab_header(&self, heading: impl Into<Heading>) -> Table {
        Table {
            heading: Some(heading.into()),
            ..self.clone()
        }
    }

    /// Resolve every spanner label to its display text.
    pub fn build_spanners(&self, build: impl Fn(&SpannerInfo) -> String) -> Table {
        self.with_spanners(self.spanners.built_with(build))
    }

    /// The print matrix for the current column and spanner state.
    pub fn print_matrix(&self, options: MatrixOptions) -> SpannerMatrix {
        spanners_print_matrix(&self.spanners, &self.boxhead, options)
    }

    fn on_empty_selection(&self, directive: &'static str) -> Result<Table> {
        match self.options.empty_selection {
            SelectionPolicy::Error => Err(BoxheadError::EmptySelection { directive }),
            SelectionPolicy::Ignore => {
                debug!(directive, "empty selection ignored");
                Ok(self.clone())
            }
        }
    }
}

/// Builder for a [`Table`] with a stub, row groups, locale or options.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    data: TableData,
    rowname_col: Option<String>,
    groupname_col: Option<String>,
    locale: Option<String>,
    options: TableOptions,
}

impl TableBuilder {
    pub fn new(data: TableData) -> Self {
        TableBuilder {
            data,
            rowname_col: None,
            groupname_col: None,
            locale: None,
            options: TableOptions::default(),
        }
    }

    /// Column whose values label the rows (the stub).
    pub fn rowname_col(mut self, var: impl Into<String>) -> Self {
        self.rowname_col = Some(var.into());
        self
    }

    /// Column whose values group the rows.
    pub fn groupname_col(mut self, var: impl Into<String>) -> Self {
        self.groupname_col = Some(var.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Table> {
        let mut boxhead = Boxhead::from_data(&self.data);
        if let Some(var) = &self.rowname_col {
            boxhead = boxhead.with_kind(&Columns::from(var.as_str()), ColumnKind::Stub)?;
        }
        if let Some(var) = &self.groupname_col {
            boxhead = boxhead.with_kind(&Columns::from(var.as_str()), ColumnKind::RowGroup)?;
        }
        Ok(Table {
            data: self.data,
            boxhead,
            locale: self.locale,
            options: self.options,
            ..Default::default()
        })
    }
}
