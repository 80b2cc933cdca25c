use chrono::NaiveDate;
use tempfile::tempdir;

use expense_core::storage::{ExpenseStore, NewExpense, SqliteStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("expenses.db");

    let added = {
        let mut store = SqliteStore::open(&path).expect("open should succeed");
        store
            .insert(&NewExpense::new("Lunch", 12.5, date(2024, 1, 1)))
            .expect("insert should succeed")
    };

    let store = SqliteStore::open(&path).expect("reopen should succeed");
    let found = store
        .find_by_id(&added.id)
        .expect("lookup should succeed")
        .expect("record should survive reopen");
    assert_eq!(found, added);
}

#[test]
fn test_open_is_idempotent_on_existing_schema() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("expenses.db");

    SqliteStore::open(&path).expect("first open");
    let mut store = SqliteStore::open(&path).expect("second open");

    store
        .insert(&NewExpense::new("Coffee", 3.25, date(2024, 1, 1)))
        .expect("insert after re-open");
    assert_eq!(store.find_by_date(date(2024, 1, 1)).unwrap().len(), 1);
}

#[test]
fn test_batch_delete_spans_reopen() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("expenses.db");
    let day = date(2024, 1, 1);

    {
        let mut store = SqliteStore::open(&path).expect("open");
        store.insert(&NewExpense::new("Lunch", 12.5, day)).unwrap();
        store.insert(&NewExpense::new("Coffee", 3.25, day)).unwrap();
    }

    let mut store = SqliteStore::open(&path).expect("reopen");
    let batch = store.find_by_date(day).unwrap();
    assert_eq!(batch.len(), 2);
    store.delete_all(&batch).expect("batch delete");

    let store = SqliteStore::open(&path).expect("reopen after delete");
    assert!(store.find_by_date(day).unwrap().is_empty());
}
