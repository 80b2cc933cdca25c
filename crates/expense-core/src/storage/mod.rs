//! Storage abstraction for expense records.
//!
//! The `ExpenseStore` trait defines the persistence contract; `SqliteStore`
//! is the shipped backend. The domain service works against the trait only.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStore;
pub use traits::ExpenseStore;
pub use types::{DaySummary, Expense, NewExpense, SpendingExtremes};
