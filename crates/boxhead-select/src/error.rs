//! Error types for the select crate.

use thiserror::Error;

/// Errors that can occur when building or resolving selectors.
#[derive(Debug, Error)]
pub enum SelectError {
    /// A selector named a column the boxhead does not have.
    #[error("unknown column '{name}'")]
    UnknownColumn { name: String },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Result type for select operations.
pub type Result<T> = std::result::Result<T, SelectError>;
