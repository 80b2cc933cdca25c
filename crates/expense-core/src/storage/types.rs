//! Core data types for the expense domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted expense record.
///
/// Invariants (enforced by the service on every create/edit, backed up by
/// store-level constraints): `name` is non-blank and `amount > 0`. The
/// `id` and `date` never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store on insert
    pub id: Uuid,

    /// User-supplied display label, free text
    pub name: String,

    /// Positive amount in a single implicit currency
    pub amount: f64,

    /// Calendar date the expense is attributed to (no time-of-day)
    pub date: NaiveDate,
}

/// Builder for expenses awaiting insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(name: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            date,
        }
    }
}

/// One day bucket's total spend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total: f64,
}

/// Highest- and lowest-spending days across the store.
///
/// On a store with a single distinct date both halves refer to that date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpendingExtremes {
    pub max: DaySummary,
    pub min: DaySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let new = NewExpense::new("Lunch", 12.5, date);

        assert_eq!(new.name, "Lunch");
        assert_eq!(new.amount, 12.5);
        assert_eq!(new.date, date);
    }
}
