//! Error types for the boxhead crate.

use thiserror::Error;

/// Errors raised by table directives and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxheadError {
    /// A column identity (selected column or move anchor) is not in the boxhead.
    #[error("column '{name}' does not exist in the table")]
    UnknownColumn { name: String },

    /// A referenced spanner id is not in the spanner registry.
    #[error("spanner '{id}' does not exist in the table")]
    UnknownSpanner { id: String },

    /// A directive that needs at least one column resolved to none.
    #[error("{directive}: no columns were selected")]
    EmptySelection { directive: &'static str },

    /// Two columns share the same identity.
    #[error("column '{name}' appears more than once")]
    DuplicateColumn { name: String },

    /// A spanner with this id is already registered.
    #[error("spanner id '{id}' is already in use")]
    DuplicateSpanner { id: String },

    /// A data row does not have one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Index-based replace past the end of a registry.
    #[error("index {index} is out of bounds for a registry of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Options could not be parsed.
    #[error("invalid table options: {0}")]
    InvalidOptions(String),
}

impl BoxheadError {
    pub(crate) fn unknown_column(name: impl Into<String>) -> Self {
        BoxheadError::UnknownColumn { name: name.into() }
    }

    pub(crate) fn unknown_spanner(id: impl Into<String>) -> Self {
        BoxheadError::UnknownSpanner { id: id.into() }
    }
}

/// Result type for boxhead operations.
pub type Result<T> = std::result::Result<T, BoxheadError>;
