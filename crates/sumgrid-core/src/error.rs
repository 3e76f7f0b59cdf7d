//! Error types for sumgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Grid dimensions must both be at least one
    #[error("Invalid grid dimensions: {cols} columns x {rows} rows")]
    InvalidDimensions { cols: u16, rows: u32 },

    /// Growing past the last labelled column
    #[error("Column limit reached: at most {0} columns (gutter plus A-Z)")]
    ColumnLimit(u16),

    /// Row count would overflow
    #[error("Row limit reached")]
    RowLimit,

    /// The editor only accepts input while a single cell is selected
    #[error("Editor is disabled while a row or column is selected")]
    EditorDisabled,

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
