//! Error types for expense core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages. "Not found" is deliberately absent here:
//! a missing record is an expected outcome and is modeled as `Ok(None)`
//! by the operations that can encounter it.

use thiserror::Error;

/// Result type alias for expense operations.
pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Core error type for expense operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// A field value failed domain validation. Always surfaced to the
    /// caller, never silently corrected.
    #[error("Validation error: {field} {reason}")]
    Validation {
        /// Which field failed ("name" or "amount")
        field: &'static str,
        reason: String,
    },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}
