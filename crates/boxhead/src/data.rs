//! Source data held by a table.
//!
//! Cells are already-formatted strings; value formatting happens before the
//! data reaches this crate.

use serde::{Deserialize, Serialize};

use crate::error::{BoxheadError, Result};

/// Column names plus rows of cell text, one cell per column.
///
/// Deserializing goes through [`TableData::new`], so duplicate names and
/// ragged rows are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTableData")]
pub struct TableData {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct RawTableData {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTableData> for TableData {
    type Error = BoxheadError;

    fn try_from(raw: RawTableData) -> Result<Self> {
        TableData::new(raw.columns, raw.rows)
    }
}

impl TableData {
    /// Validate and wrap `rows` under `columns`.
    pub fn new<C, R, S>(
        columns: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self>
    where
        C: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in columns {
            let name = name.into();
            if names.contains(&name) {
                return Err(BoxheadError::DuplicateColumn { name });
            }
            names.push(name);
        }

        let mut out: Vec<Vec<String>> = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            if row.len() != names.len() {
                return Err(BoxheadError::RaggedRow {
                    row: index,
                    expected: names.len(),
                    found: row.len(),
                });
            }
            out.push(row);
        }

        Ok(TableData {
            columns: names,
            rows: out,
        })
    }

    /// Columns without any rows.
    pub fn from_columns<C: Into<String>>(columns: impl IntoIterator<Item = C>) -> Result<Self> {
        TableData::new(columns, Vec::<Vec<String>>::new())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Text of the cell in `row` under column `var`.
    pub fn cell(&self, row: usize, var: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == var)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// All cells of column `var`, top to bottom.
    pub fn column_values(&self, var: &str) -> Option<Vec<&str>> {
        let col = self.columns.iter().position(|c| c == var)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(col).map_or("", String::as_str))
                .collect(),
        )
    }
}
