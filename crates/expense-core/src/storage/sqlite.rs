//! SQLite storage backend.
//!
//! Expenses live in a single `expenses` table; dates are stored as
//! `YYYY-MM-DD` text so date-bucket queries are plain equality and
//! insertion order falls out of `rowid`.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ExpenseError, Result};
use crate::storage::traits::ExpenseStore;
use crate::storage::types::{Expense, NewExpense};

/// SQLite-backed expense store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Open (creating if absent) an expense database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(Self::sqlite_error)?;
        debug!(path = %path.display(), "opened expense database");
        Self::init_schema(conn)
    }

    /// Open a fresh in-memory store. Used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Self::sqlite_error)?;
        Self::init_schema(conn)
    }

    fn init_schema(conn: Connection) -> Result<Self> {
        // The CHECK constraints back up service-level validation; they are
        // the last line of defense, not the primary one.
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                amount REAL NOT NULL CHECK (amount > 0),
                date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
            "#,
        )
        .map_err(Self::sqlite_error)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn sqlite_error(err: rusqlite::Error) -> ExpenseError {
        ExpenseError::Storage(format!("SQLite error: {}", err))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| ExpenseError::Storage("SQLite connection poisoned".to_string()))
    }

    fn expense_from_row(
        id_str: String,
        name: String,
        amount: f64,
        date_str: String,
    ) -> Result<Expense> {
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| ExpenseError::Storage(format!("Invalid UUID: {}", e)))?;
        let date = NaiveDate::parse_from_str(&date_str, Self::DATE_FORMAT)
            .map_err(|e| ExpenseError::Storage(format!("Invalid date: {}", e)))?;

        Ok(Expense {
            id,
            name,
            amount,
            date,
        })
    }

    // LIKE treats %/_ as wildcards; expense names are free text, so the
    // needle must match them literally.
    fn escape_like(needle: &str) -> String {
        needle
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_")
    }

    fn format_date(date: NaiveDate) -> String {
        date.format(Self::DATE_FORMAT).to_string()
    }
}

impl ExpenseStore for SqliteStore {
    fn insert(&mut self, new: &NewExpense) -> Result<Expense> {
        let conn = self.lock()?;
        let id = Uuid::new_v4();

        conn.execute(
            "INSERT INTO expenses (id, name, amount, date) VALUES (?, ?, ?, ?)",
            (
                id.to_string(),
                &new.name,
                new.amount,
                Self::format_date(new.date),
            ),
        )
        .map_err(Self::sqlite_error)?;

        Ok(Expense {
            id,
            name: new.name.clone(),
            amount: new.amount,
            date: new.date,
        })
    }

    fn find_by_id(&self, id: &Uuid) -> Result<Option<Expense>> {
        let conn = self.lock()?;

        let result = conn.query_row(
            "SELECT id, name, amount, date FROM expenses WHERE id = ?",
            [id.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        );

        match result {
            Ok((id_str, name, amount, date_str)) => Ok(Some(Self::expense_from_row(
                id_str, name, amount, date_str,
            )?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Self::sqlite_error(e)),
        }
    }

    fn update(&mut self, expense: &Expense) -> Result<Expense> {
        let conn = self.lock()?;

        // Only name and amount are mutable; date and id stay as created.
        let affected = conn
            .execute(
                "UPDATE expenses SET name = ?, amount = ? WHERE id = ?",
                (&expense.name, expense.amount, expense.id.to_string()),
            )
            .map_err(Self::sqlite_error)?;
        if affected == 0 {
            return Err(ExpenseError::Storage(format!(
                "No expense with id {} to update",
                expense.id
            )));
        }

        Ok(expense.clone())
    }

    fn delete(&mut self, expense: &Expense) -> Result<()> {
        let conn = self.lock()?;

        let affected = conn
            .execute(
                "DELETE FROM expenses WHERE id = ?",
                [expense.id.to_string()],
            )
            .map_err(Self::sqlite_error)?;
        if affected == 0 {
            return Err(ExpenseError::Storage(format!(
                "No expense with id {} to delete",
                expense.id
            )));
        }

        Ok(())
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Expense>> {
        let conn = self.lock()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, name, amount, date FROM expenses WHERE date = ? ORDER BY rowid",
            )
            .map_err(Self::sqlite_error)?;
        let rows = stmt
            .query_map([Self::format_date(date)], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(Self::sqlite_error)?;

        let mut expenses = Vec::new();
        for row in rows {
            let (id_str, name, amount, date_str) = row.map_err(Self::sqlite_error)?;
            expenses.push(Self::expense_from_row(id_str, name, amount, date_str)?);
        }

        Ok(expenses)
    }

    fn find_by_name_contains(&self, substring: &str) -> Result<Vec<Expense>> {
        let conn = self.lock()?;

        let needle = Self::escape_like(&substring.to_lowercase());
        let mut stmt = conn
            .prepare(
                r"SELECT id, name, amount, date FROM expenses
                  WHERE LOWER(name) LIKE '%' || ? || '%' ESCAPE '\'
                  ORDER BY rowid",
            )
            .map_err(Self::sqlite_error)?;
        let rows = stmt
            .query_map([needle], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(Self::sqlite_error)?;

        let mut expenses = Vec::new();
        for row in rows {
            let (id_str, name, amount, date_str) = row.map_err(Self::sqlite_error)?;
            expenses.push(Self::expense_from_row(id_str, name, amount, date_str)?);
        }

        Ok(expenses)
    }

    fn distinct_dates(&self) -> Result<HashSet<NaiveDate>> {
        let conn = self.lock()?;

        let mut stmt = conn
            .prepare("SELECT DISTINCT date FROM expenses")
            .map_err(Self::sqlite_error)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(Self::sqlite_error)?;

        let mut dates = HashSet::new();
        for row in rows {
            let date_str = row.map_err(Self::sqlite_error)?;
            let date = NaiveDate::parse_from_str(&date_str, Self::DATE_FORMAT)
                .map_err(|e| ExpenseError::Storage(format!("Invalid date: {}", e)))?;
            dates.insert(date);
        }

        Ok(dates)
    }

    fn delete_all(&mut self, expenses: &[Expense]) -> Result<()> {
        let mut conn = self.lock()?;

        let tx = conn.transaction().map_err(Self::sqlite_error)?;
        for expense in expenses {
            tx.execute(
                "DELETE FROM expenses WHERE id = ?",
                [expense.id.to_string()],
            )
            .map_err(Self::sqlite_error)?;
        }
        tx.commit().map_err(Self::sqlite_error)?;

        debug!(count = expenses.len(), "batch-deleted expenses");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let day = date(2024, 1, 1);

        let first = store.insert(&NewExpense::new("Lunch", 12.5, day)).unwrap();
        let second = store.insert(&NewExpense::new("Coffee", 3.25, day)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.find_by_id(&first.id).unwrap().unwrap(), first);
    }

    #[test]
    fn test_find_by_date_preserves_insertion_order() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let day = date(2024, 1, 1);

        store.insert(&NewExpense::new("Lunch", 12.5, day)).unwrap();
        store.insert(&NewExpense::new("Coffee", 3.25, day)).unwrap();
        store
            .insert(&NewExpense::new("Taxi", 20.0, date(2024, 1, 2)))
            .unwrap();

        let names: Vec<String> = store
            .find_by_date(day)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Lunch", "Coffee"]);
    }

    #[test]
    fn test_update_unknown_id_is_storage_error() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let ghost = Expense {
            id: Uuid::new_v4(),
            name: "Ghost".to_string(),
            amount: 1.0,
            date: date(2024, 1, 1),
        };

        let result = store.update(&ghost);
        assert!(matches!(result, Err(ExpenseError::Storage(_))));
    }

    #[test]
    fn test_search_escapes_like_metacharacters() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let day = date(2024, 1, 1);

        store
            .insert(&NewExpense::new("50% deposit", 40.0, day))
            .unwrap();
        store.insert(&NewExpense::new("Lunch", 12.5, day)).unwrap();

        let hits = store.find_by_name_contains("50%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "50% deposit");

        // A bare "%" must only match names containing a literal percent.
        let hits = store.find_by_name_contains("%").unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_check_constraints_back_up_validation() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let day = date(2024, 1, 1);

        assert!(store.insert(&NewExpense::new("   ", 5.0, day)).is_err());
        assert!(store.insert(&NewExpense::new("Lunch", 0.0, day)).is_err());
        assert!(store.distinct_dates().unwrap().is_empty());
    }

    #[test]
    fn test_delete_all_removes_batch() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let day = date(2024, 1, 1);

        store.insert(&NewExpense::new("Lunch", 12.5, day)).unwrap();
        store.insert(&NewExpense::new("Coffee", 3.25, day)).unwrap();

        let batch = store.find_by_date(day).unwrap();
        store.delete_all(&batch).unwrap();

        assert!(store.find_by_date(day).unwrap().is_empty());
        assert!(store.distinct_dates().unwrap().is_empty());
    }
}
