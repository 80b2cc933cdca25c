//! Output formatting helpers for the CLI.

use comfy_table::{presets::UTF8_FULL, Table};

use expense_core::Expense;

use crate::helpers::OutputFormat;

/// Two-decimal amount rendering. Presentation-only; the core keeps raw f64.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Convert an expense to JSON for output.
pub fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id,
        "name": expense.name,
        "amount": expense.amount,
        "date": expense.date,
    })
}

/// Convert multiple expenses to a JSON array for output.
pub fn expenses_json(expenses: &[Expense]) -> Vec<serde_json::Value> {
    expenses.iter().map(expense_json).collect()
}

/// Print expenses in the requested human-readable format.
pub fn print_expenses(expenses: &[Expense], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["ID", "Name", "Amount", "Date"]);
            for expense in expenses {
                table.add_row(vec![
                    expense.id.to_string(),
                    expense.name.clone(),
                    format_amount(expense.amount),
                    expense.date.to_string(),
                ]);
            }
            println!("{}", table);
        }
        OutputFormat::Plain => {
            for expense in expenses {
                println!(
                    "{} {} {} {}",
                    expense.id,
                    expense.date,
                    format_amount(expense.amount),
                    expense.name
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_expense_json_fields() {
        let expense = Expense {
            id: Uuid::new_v4(),
            name: "Lunch".to_string(),
            amount: 12.5,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let value = expense_json(&expense);
        assert_eq!(value["name"], "Lunch");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["id"], expense.id.to_string());
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(3.0), "3.00");
        assert_eq!(format_amount(15.753), "15.75");
    }
}
