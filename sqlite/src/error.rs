//! Error types for table loading.

use thiserror::Error;

/// Errors that can occur while loading CSV rows into SQLite.
#[derive(Debug, Error)]
pub enum LoadError {
    /// SQLite operation failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failure reading or parsing the CSV input.
    #[error("read error: {0}")]
    Read(#[from] csv2sql_reader::ReadError),

    /// A data row's field count does not match the header width.
    #[error("row {row} for table '{table}' has {found} field(s), expected {expected}")]
    ShapeMismatch {
        /// Target table name.
        table: String,
        /// 1-based data row number within the file.
        row: usize,
        /// Header width.
        expected: usize,
        /// Field count of the offending row.
        found: usize,
    },

    /// A table or column name that cannot be quoted into SQL.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Convenience alias for results with [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;
