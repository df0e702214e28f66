//! Error types for rendering.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while rendering a table.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while flushing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered bytes were not valid UTF-8.
    #[error("invalid utf-8 in output: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Render options or styles could not be parsed.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for RenderError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        RenderError::Io(err.into_error())
    }
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
