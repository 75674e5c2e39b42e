//! Error types for CSV reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a CSV file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input contains no records, so no header could be read.
    #[error("no header record in {}", .0.display())]
    MissingHeader(PathBuf),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure encountered in strict mode.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Physical line number (1-based) where the error was detected.
        line: u64,
        /// Description of the malformed structure.
        message: String,
    },
}

/// Convenience alias for results with [`ReadError`].
pub type Result<T> = std::result::Result<T, ReadError>;
