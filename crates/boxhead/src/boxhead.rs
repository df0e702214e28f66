//! The column registry.
//!
//! [`Boxhead`] is an ordered collection of [`ColumnInfo`] values. Order is
//! display order, left to right. Every operation returns a new registry and
//! leaves the receiver untouched, so earlier table snapshots stay valid.

use serde::{Deserialize, Serialize};

use crate::column::{Align, ColumnInfo, ColumnKind};
use crate::data::TableData;
use crate::error::{BoxheadError, Result};
use crate::selection::{Columns, MoveTarget};

/// Ordered registry of column descriptors with unique identities.
///
/// Serialized as a plain list. Deserializing goes through [`Boxhead::new`],
/// so duplicate identities are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColumnInfo>", into = "Vec<ColumnInfo>")]
pub struct Boxhead {
    columns: Vec<ColumnInfo>,
}

impl Boxhead {
    /// Build a registry, rejecting duplicate identities.
    pub fn new(columns: impl IntoIterator<Item = ColumnInfo>) -> Result<Self> {
        let mut out: Vec<ColumnInfo> = Vec::new();
        for info in columns {
            if out.iter().any(|c| c.var == info.var) {
                return Err(BoxheadError::DuplicateColumn { name: info.var });
            }
            out.push(info);
        }
        Ok(Boxhead { columns: out })
    }

    /// Build a registry of default-kind columns from their names.
    pub fn from_vars<S: Into<String>>(vars: impl IntoIterator<Item = S>) -> Result<Self> {
        Boxhead::new(vars.into_iter().map(ColumnInfo::new))
    }

    /// Default-kind columns for every data column, in data order.
    pub(crate) fn from_data(data: &TableData) -> Self {
        Boxhead {
            columns: data.columns().iter().map(ColumnInfo::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnInfo> {
        self.columns.iter()
    }

    pub fn as_slice(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Look up a column by identity.
    pub fn get(&self, var: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.var == var)
    }

    /// Display position of a column.
    pub fn position(&self, var: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.var == var)
    }

    pub fn contains(&self, var: &str) -> bool {
        self.position(var).is_some()
    }

    /// All identities in display order.
    pub fn vars(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.var.clone()).collect()
    }

    /// Identities of columns that are not hidden.
    pub fn visible_vars(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.visible())
            .map(|c| c.var.clone())
            .collect()
    }

    /// Visible body columns: not hidden, not stub, not row group.
    pub fn default_vars(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Default)
            .map(|c| c.var.clone())
            .collect()
    }

    /// The stub column, if one was designated.
    pub fn stub(&self) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.kind == ColumnKind::Stub)
    }

    /// The row-group column, if one was designated.
    pub fn row_group(&self) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.kind == ColumnKind::RowGroup)
    }

    /// A registry holding only the columns matching `predicate`.
    pub fn filter(&self, predicate: impl Fn(&ColumnInfo) -> bool) -> Boxhead {
        Boxhead {
            columns: self.columns.iter().filter(|c| predicate(c)).cloned().collect(),
        }
    }

    /// A registry with the column at `index` replaced, keeping its position.
    pub fn replace(&self, index: usize, info: ColumnInfo) -> Result<Boxhead> {
        if index >= self.columns.len() {
            return Err(BoxheadError::IndexOutOfBounds {
                index,
                len: self.columns.len(),
            });
        }
        if let Some(pos) = self.position(&info.var) {
            if pos != index {
                return Err(BoxheadError::DuplicateColumn { name: info.var });
            }
        }
        let mut columns = self.columns.clone();
        columns[index] = info;
        Ok(Boxhead { columns })
    }

    /// A registry with `info` appended at the end.
    pub fn append(&self, info: ColumnInfo) -> Result<Boxhead> {
        if self.contains(&info.var) {
            return Err(BoxheadError::DuplicateColumn { name: info.var });
        }
        let mut columns = self.columns.clone();
        columns.push(info);
        Ok(Boxhead { columns })
    }

    /// Fails on the first identity missing from the registry.
    pub fn check_columns(&self, columns: &Columns) -> Result<()> {
        match columns.iter().find(|var| !self.contains(var)) {
            Some(missing) => Err(BoxheadError::unknown_column(missing.as_str())),
            None => Ok(()),
        }
    }

    /// Move `columns` to `target`.
    ///
    /// Moved columns keep the order they were given in; all other columns keep
    /// their relative order. An anchor that is itself among `columns` stays
    /// where it is and the rest land after it; if it is the only one, the
    /// registry comes back unchanged.
    pub fn moved(&self, columns: &Columns, target: &MoveTarget) -> Result<Boxhead> {
        self.check_columns(columns)?;
        let mut selected = columns.clone().dedup().into_vec();

        if let MoveTarget::After(anchor) = target {
            if !self.contains(anchor) {
                return Err(BoxheadError::unknown_column(anchor.as_str()));
            }
            selected.retain(|var| var != anchor);
        }
        if selected.is_empty() {
            return Ok(self.clone());
        }

        let moving: Vec<ColumnInfo> = selected
            .iter()
            .filter_map(|var| self.get(var).cloned())
            .collect();
        let mut rest: Vec<ColumnInfo> = self
            .columns
            .iter()
            .filter(|c| !selected.contains(&c.var))
            .cloned()
            .collect();

        let at = match target {
            MoveTarget::Start => 0,
            MoveTarget::End => rest.len(),
            MoveTarget::After(anchor) => {
                rest.iter()
                    .position(|c| &c.var == anchor)
                    .ok_or_else(|| BoxheadError::unknown_column(anchor.as_str()))?
                    + 1
            }
        };
        rest.splice(at..at, moving);
        Ok(Boxhead { columns: rest })
    }

    /// Make `columns` contiguous, anchored at the first of them.
    pub fn gathered(&self, columns: &Columns) -> Result<Boxhead> {
        match columns.iter().next() {
            Some(first) => self.moved(columns, &MoveTarget::After(first.clone())),
            None => Ok(self.clone()),
        }
    }

    /// Set the kind of every column in `columns`.
    pub fn with_kind(&self, columns: &Columns, kind: ColumnKind) -> Result<Boxhead> {
        self.check_columns(columns)?;
        Ok(self.map_selected(columns, |info| info.kind = kind))
    }

    /// Mark `columns` hidden. Order, width and label are kept.
    pub fn hidden(&self, columns: &Columns) -> Result<Boxhead> {
        self.with_kind(columns, ColumnKind::Hidden)
    }

    /// Set widths for the named columns only.
    pub fn with_widths<K, V>(&self, widths: impl IntoIterator<Item = (K, V)>) -> Result<Boxhead>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut out = self.clone();
        for (var, width) in widths {
            let index = out
                .position(var.as_ref())
                .ok_or_else(|| BoxheadError::unknown_column(var.as_ref()))?;
            out.columns[index].width = Some(width.into());
        }
        Ok(out)
    }

    /// Set display labels for the named columns only.
    pub fn with_labels<K, V>(&self, labels: impl IntoIterator<Item = (K, V)>) -> Result<Boxhead>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut out = self.clone();
        for (var, label) in labels {
            let index = out
                .position(var.as_ref())
                .ok_or_else(|| BoxheadError::unknown_column(var.as_ref()))?;
            out.columns[index].label = Some(label.into());
        }
        Ok(out)
    }

    /// Set the alignment of `columns`.
    pub fn with_align(&self, columns: &Columns, align: Align) -> Result<Boxhead> {
        self.check_columns(columns)?;
        Ok(self.map_selected(columns, |info| info.align = Some(align)))
    }

    fn map_selected(&self, columns: &Columns, f: impl Fn(&mut ColumnInfo)) -> Boxhead {
        let mut out = self.clone();
        for info in out.columns.iter_mut() {
            if columns.iter().any(|var| *var == info.var) {
                f(info);
            }
        }
        out
    }
}

impl TryFrom<Vec<ColumnInfo>> for Boxhead {
    type Error = BoxheadError;

    fn try_from(columns: Vec<ColumnInfo>) -> Result<Self> {
        Boxhead::new(columns)
    }
}

impl From<Boxhead> for Vec<ColumnInfo> {
    fn from(boxhead: Boxhead) -> Self {
        boxhead.columns
    }
}

impl<'a> IntoIterator for &'a Boxhead {
    type Item = &'a ColumnInfo;
    type IntoIter = std::slice::Iter<'a, ColumnInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
