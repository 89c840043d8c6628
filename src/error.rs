//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A required field was missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export requested while the ledger holds no expenses
    #[error("No expenses to export")]
    EmptyExport,

    /// The user declined a deletion prompt
    #[error("Deletion was not confirmed")]
    DeleteNotConfirmed,

    /// Positional index outside the ledger
    #[error("Expense not found at index {index} (ledger has {len} entries)")]
    ExpenseNotFound { index: usize, len: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl TrackerError {
    /// Create a validation error for a field that must not be blank
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error only reflects a user decision and should not be reported
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::DeleteNotConfirmed)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
