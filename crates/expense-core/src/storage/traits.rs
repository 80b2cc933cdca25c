//! Expense store trait definition.
//!
//! The `ExpenseStore` trait defines the interface the domain service works
//! against. This abstraction keeps the service independent of the backend
//! (SQLite today, anything keyed-and-queryable tomorrow).

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use super::types::{Expense, NewExpense};
use crate::error::Result;

/// Persistence contract for expense records.
///
/// All implementations must ensure:
/// - Each call is atomic on its own (no cross-call transactions)
/// - Ids are assigned by the store on insert and never reused
/// - `find_by_date` enumeration order is consistent within one store
///   instance (insertion order for the SQLite backend)
pub trait ExpenseStore: Send + Sync {
    /// Insert a new expense and return the persisted record with its
    /// assigned id.
    fn insert(&mut self, new: &NewExpense) -> Result<Expense>;

    /// Get an expense by id.
    ///
    /// Returns `Ok(Some(expense))` if found, `Ok(None)` if not found.
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Expense>>;

    /// Persist changes to `name` and `amount` of an existing record.
    ///
    /// The expense must carry an id already present in the store; `date`
    /// is never rewritten.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Storage` if the id does not exist. Callers
    /// that treat absence as a routine outcome check `find_by_id` first.
    fn update(&mut self, expense: &Expense) -> Result<Expense>;

    /// Remove a single expense.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Storage` if the id does not exist.
    fn delete(&mut self, expense: &Expense) -> Result<()>;

    /// All expenses attributed to `date`, in insertion order. A date with
    /// no records yields an empty vec.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Expense>>;

    /// All expenses whose name contains `substring`, case-insensitive.
    /// An empty substring matches every record.
    fn find_by_name_contains(&self, substring: &str) -> Result<Vec<Expense>>;

    /// The deduplicated set of calendar dates with at least one expense.
    fn distinct_dates(&self) -> Result<HashSet<NaiveDate>>;

    /// Remove every listed expense in a single logical batch.
    fn delete_all(&mut self, expenses: &[Expense]) -> Result<()>;
}
