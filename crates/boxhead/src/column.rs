//! Column descriptors.
//!
//! A [`ColumnInfo`] describes one column of the source data: its identity,
//! the role it plays in the table, and presentation metadata set by
//! directives (label, width, alignment).

use serde::{Deserialize, Serialize};

/// Role a column plays in the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Regular body column shown under the column labels.
    #[default]
    Default,
    /// Row label column, rendered in the stub to the left of the body.
    Stub,
    /// Column whose values define row groups.
    RowGroup,
    /// Column kept in the registry but not displayed.
    Hidden,
}

/// Horizontal alignment of a column's label and cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on both sides.
    Center,
    /// Pad on the left.
    Right,
}

/// Descriptor for a single column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column identity (name in the source data).
    pub var: String,
    /// Role of the column.
    #[serde(default)]
    pub kind: ColumnKind,
    /// Display label; the identity is shown when unset.
    #[serde(default)]
    pub label: Option<String>,
    /// Opaque width such as `"120px"` or `"25%"`.
    #[serde(default)]
    pub width: Option<String>,
    /// Alignment; renderers pick one when unset.
    #[serde(default)]
    pub align: Option<Align>,
}

impl ColumnInfo {
    /// Create a default-kind column with no presentation metadata.
    pub fn new(var: impl Into<String>) -> Self {
        ColumnInfo {
            var: var.into(),
            kind: ColumnKind::Default,
            label: None,
            width: None,
            align: None,
        }
    }

    /// Set the column kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the width string.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Hidden columns are the only invisible ones.
    pub fn visible(&self) -> bool {
        self.kind != ColumnKind::Hidden
    }

    /// True for stub and row-group columns, which never appear under spanners.
    pub fn is_stub_like(&self) -> bool {
        matches!(self.kind, ColumnKind::Stub | ColumnKind::RowGroup)
    }

    /// The text shown in the column-label row.
    pub fn column_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_is_not_visible() {
        assert!(ColumnInfo::new("a").visible());
        assert!(ColumnInfo::new("a").kind(ColumnKind::Stub).visible());
        assert!(!ColumnInfo::new("a").kind(ColumnKind::Hidden).visible());
    }

    #[test]
    fn test_column_label_falls_back_to_var() {
        assert_eq!(ColumnInfo::new("num").column_label(), "num");
        assert_eq!(ColumnInfo::new("num").label("Number").column_label(), "Number");
    }

    #[test]
    fn test_kind_deserializes_snake_case() {
        let info: ColumnInfo = serde_yaml::from_str("var: grp\nkind: row_group\n").unwrap();
        assert_eq!(info.kind, ColumnKind::RowGroup);
        assert_eq!(info.width, None);
    }
}
