//! Error types for the tabprof library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabprof operations.
#[derive(Debug, Error)]
pub enum TabprofError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no columns to profile.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Columns of a table disagree on row count.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tabprof operations.
pub type Result<T> = std::result::Result<T, TabprofError>;
