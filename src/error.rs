//! Error types for parsing, sorting and writing tables

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by table operations
#[derive(Debug, Error)]
pub enum TableError {
    /// The backing text stream could not be opened, read or written.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation attempted on an empty or columnless table.
    #[error("invalid table: {reason}")]
    InvalidTable { reason: String },

    /// Out-of-range index, name lookup without a header, or unmatched name.
    #[error("invalid column: {reason}")]
    InvalidColumn { reason: String },
}

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_column(reason: impl Into<String>) -> Self {
        Self::InvalidColumn {
            reason: reason.into(),
        }
    }
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
