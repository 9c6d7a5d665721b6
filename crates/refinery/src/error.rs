//! Error types for the Refinery library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Refinery operations.
///
/// Engine-level problems (type mismatches, degenerate statistics) are never
/// raised as errors; they are reported as [`Diagnostic`](crate::Diagnostic)s
/// alongside the transformed table. This type only covers I/O and input
/// boundaries.
#[derive(Debug, Error)]
pub enum RefineryError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no columns to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Two columns share the same name.
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    /// A column does not have the same number of rows as the table.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A cell does not fit its column's declared kind.
    #[error("Column '{column}' is {kind} but row {row} holds a value of another kind")]
    CellKind {
        column: String,
        kind: crate::table::ColumnKind,
        row: usize,
    },

    /// An action name that is not part of the catalog.
    #[error("Unknown action: '{0}'")]
    UnknownAction(String),

    /// Error saving or loading a choices file.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Refinery operations.
pub type Result<T> = std::result::Result<T, RefineryError>;
