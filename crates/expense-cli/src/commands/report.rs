//! Handlers for the aggregate commands: dates, total, report.
//!
//! The core hands back an unordered date set and raw totals; sorting and
//! currency formatting happen here.

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::app::open_service;
use crate::cli::{Cli, DatesArgs, ReportArgs, TotalArgs};
use crate::helpers::parse_date;
use crate::output::format_amount;

pub fn handle_dates(cli: &Cli, args: &DatesArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;

    let mut dates: Vec<NaiveDate> = service.distinct_dates()?.into_iter().collect();
    dates.sort();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dates)?);
        return Ok(());
    }

    if dates.is_empty() {
        if !cli.quiet {
            println!("No expenses recorded.");
        }
        return Ok(());
    }
    for date in dates {
        println!("{}", date);
    }
    Ok(())
}

pub fn handle_total(cli: &Cli, args: &TotalArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;

    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };
    let total = service.day_total(date)?;

    if cli.quiet {
        println!("{}", format_amount(total));
    } else {
        println!("Total for {}: {}", date, format_amount(total));
    }
    Ok(())
}

pub fn handle_report(cli: &Cli, args: &ReportArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;

    let extremes = service.analyze_extremes()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&extremes)?);
        return Ok(());
    }

    match extremes {
        None => {
            if !cli.quiet {
                println!("No expenses recorded.");
            }
        }
        Some(extremes) => {
            println!(
                "Highest spending: {} ({})",
                extremes.max.date,
                format_amount(extremes.max.total).bold()
            );
            println!(
                "Lowest spending:  {} ({})",
                extremes.min.date,
                format_amount(extremes.min.total).bold()
            );
        }
    }
    Ok(())
}
