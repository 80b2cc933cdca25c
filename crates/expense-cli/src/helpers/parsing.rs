//! Parsing helpers for dates, expense IDs, and output format.

use chrono::NaiveDate;
use uuid::Uuid;

/// Parse a calendar date in YYYY-MM-DD form.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", value))
}

/// Parse an expense ID (full UUID).
pub fn parse_expense_id(value: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| anyhow::anyhow!("Invalid expense ID: {}", e))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse the --format flag. `None` means "caller's default".
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Invalid output format: {} (use table or plain)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        let date = parse_date("2024-01-02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_forms() {
        assert!(parse_date("01/02/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_parse_expense_id_rejects_garbage() {
        assert!(parse_expense_id("not-a-uuid").is_err());
        assert!(parse_expense_id("00000000-0000-0000-0000-000000000000").is_ok());
    }
}
