//! # Expense Core
//!
//! Core library for a personal expense tracker: record discrete expenses
//! (name, amount, calendar date), group them by day, and run basic
//! retrieval, editing, deletion, search, and min/max-by-day analysis.
//!
//! This crate provides the domain logic and storage abstractions
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `ExpenseStore` trait and the SQLite implementation
//! - **service**: `ExpenseService`, the domain operations over a store
//! - **clock**: injectable calendar clock so "today" is testable
//! - **error**: typed error taxonomy shared by storage and service

pub mod clock;
pub mod error;
pub mod service;
pub mod storage;

pub use clock::{Clock, SystemClock};
pub use error::{ExpenseError, Result};
pub use service::ExpenseService;
pub use storage::{DaySummary, Expense, ExpenseStore, NewExpense, SpendingExtremes, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
