//! Shared helpers for command handlers.

mod parsing;

pub use parsing::{parse_date, parse_expense_id, parse_output_format, OutputFormat};
