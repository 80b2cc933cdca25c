//! Expense domain service.
//!
//! All business rules live here: validation, date-bucketed retrieval,
//! existence-checked mutation, substring search, and min/max-by-day
//! analysis. The service renders nothing and reads no terminal input;
//! it mediates between an interaction surface and an `ExpenseStore`.
//!
//! Every operation re-reads the store; nothing is cached across calls.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::{ExpenseError, Result};
use crate::storage::{DaySummary, Expense, ExpenseStore, NewExpense, SpendingExtremes};

/// Domain operations over an expense store.
///
/// The store is passed in at construction (no hidden globals), and the
/// clock is injectable so "today" stays testable.
pub struct ExpenseService<S: ExpenseStore> {
    store: S,
    clock: Box<dyn Clock>,
}

impl<S: ExpenseStore> ExpenseService<S> {
    /// Build a service over `store` using the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    /// Build a service with an explicit clock.
    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Expenses attributed to `date`, in store enumeration order.
    /// A date with no records yields an empty vec, not an error.
    pub fn list_for_date(&self, date: NaiveDate) -> Result<Vec<Expense>> {
        self.store.find_by_date(date)
    }

    /// Expenses for the current calendar date, evaluated at call time.
    pub fn list_for_today(&self) -> Result<Vec<Expense>> {
        self.list_for_date(self.clock.today())
    }

    /// The deduplicated set of dates holding at least one expense.
    /// Unordered; chronological sorting is a presentation concern.
    pub fn distinct_dates(&self) -> Result<HashSet<NaiveDate>> {
        self.store.distinct_dates()
    }

    /// All expenses whose name contains `substring`, case-insensitive.
    /// An empty substring matches every record.
    pub fn search_by_name(&self, substring: &str) -> Result<Vec<Expense>> {
        self.store.find_by_name_contains(substring)
    }

    /// Record a new expense. The sole constructor of records.
    ///
    /// `date` defaults to today when omitted.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Validation` for a blank name or non-positive
    /// amount; the store is left untouched in that case.
    pub fn add(&mut self, name: &str, amount: f64, date: Option<NaiveDate>) -> Result<Expense> {
        validate(name, amount)?;

        let date = date.unwrap_or_else(|| self.clock.today());
        let expense = self.store.insert(&NewExpense::new(name, amount, date))?;
        info!(id = %expense.id, %date, "added expense");
        Ok(expense)
    }

    /// Change the name and amount of an existing expense. The id and date
    /// are never touched.
    ///
    /// Returns `Ok(None)` when no expense has that id; absence is an
    /// expected outcome, not an error. Validation failures leave the
    /// store unmodified.
    pub fn edit(&mut self, id: &Uuid, name: &str, amount: f64) -> Result<Option<Expense>> {
        validate(name, amount)?;

        let Some(mut expense) = self.store.find_by_id(id)? else {
            debug!(%id, "edit target not found");
            return Ok(None);
        };
        expense.name = name.to_string();
        expense.amount = amount;

        let updated = self.store.update(&expense)?;
        info!(%id, "edited expense");
        Ok(Some(updated))
    }

    /// Remove an expense, returning its prior state so callers can show
    /// what was deleted. `Ok(None)` when the id does not exist (deleting
    /// twice yields `Ok(None)` the second time).
    pub fn delete(&mut self, id: &Uuid) -> Result<Option<Expense>> {
        let Some(expense) = self.store.find_by_id(id)? else {
            debug!(%id, "delete target not found");
            return Ok(None);
        };

        self.store.delete(&expense)?;
        info!(%id, "deleted expense");
        Ok(Some(expense))
    }

    /// Remove every expense on `date` as one batch, returning the count
    /// removed (0 when the day bucket is already empty).
    pub fn delete_all_for_date(&mut self, date: NaiveDate) -> Result<usize> {
        let expenses = self.store.find_by_date(date)?;
        let removed = expenses.len();
        if removed > 0 {
            self.store.delete_all(&expenses)?;
            info!(%date, count = removed, "cleared day bucket");
        }
        Ok(removed)
    }

    /// Sum of amounts on `date`; 0 for a date with no records.
    pub fn day_total(&self, date: NaiveDate) -> Result<f64> {
        Ok(self.list_for_date(date)?.iter().map(|e| e.amount).sum())
    }

    /// The highest- and lowest-spending days across all distinct dates.
    ///
    /// Tie-break: the earliest date in ascending calendar order among
    /// equal totals, for both the max and the min. Returns `Ok(None)` on
    /// an empty store; that is distinct from a day whose total is zero.
    pub fn analyze_extremes(&self) -> Result<Option<SpendingExtremes>> {
        let mut dates: Vec<NaiveDate> = self.distinct_dates()?.into_iter().collect();
        // Ascending scan with strict comparisons keeps ties on the
        // earliest date.
        dates.sort();

        let mut summaries = dates.into_iter().map(|date| -> Result<DaySummary> {
            Ok(DaySummary {
                date,
                total: self.day_total(date)?,
            })
        });

        let Some(first) = summaries.next().transpose()? else {
            return Ok(None);
        };
        let mut max = first;
        let mut min = first;
        for summary in summaries {
            let summary = summary?;
            if summary.total > max.total {
                max = summary;
            }
            if summary.total < min.total {
                min = summary;
            }
        }

        Ok(Some(SpendingExtremes { max, min }))
    }
}

fn validate(name: &str, amount: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ExpenseError::Validation {
            field: "name",
            reason: "must not be blank".to_string(),
        });
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ExpenseError::Validation {
            field: "amount",
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
