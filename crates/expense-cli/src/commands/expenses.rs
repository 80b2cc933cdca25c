//! Handlers for the record-level commands: add, list, search, edit,
//! delete, clear-day.

use crate::app::open_service;
use crate::cli::{AddArgs, Cli, ClearDayArgs, DeleteArgs, EditArgs, ListArgs, SearchArgs};
use crate::helpers::{parse_date, parse_expense_id, parse_output_format, OutputFormat};
use crate::output::{expenses_json, format_amount, print_expenses};

pub fn handle_add(cli: &Cli, args: &AddArgs) -> anyhow::Result<()> {
    let mut service = open_service(cli)?;

    let date = args.date.as_deref().map(parse_date).transpose()?;
    let expense = service.add(&args.name, args.amount, date)?;

    if !cli.quiet {
        println!(
            "Added expense {}: {} ({}) on {}",
            expense.id,
            expense.name,
            format_amount(expense.amount),
            expense.date
        );
    }
    Ok(())
}

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;

    let expenses = match args.date.as_deref() {
        Some(value) => service.list_for_date(parse_date(value)?)?,
        None => service.list_for_today()?,
    };

    let format = parse_output_format(args.format.as_deref())?;
    if args.json {
        if format.is_some() {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        println!("{}", serde_json::to_string_pretty(&expenses_json(&expenses))?);
        return Ok(());
    }

    if expenses.is_empty() {
        if !cli.quiet {
            println!("No expenses found.");
        }
        return Ok(());
    }

    print_expenses(&expenses, format.unwrap_or(OutputFormat::Table));
    if !cli.quiet {
        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        println!("Total: {}", format_amount(total));
    }
    Ok(())
}

pub fn handle_search(cli: &Cli, args: &SearchArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;

    let expenses = service.search_by_name(&args.query)?;

    let format = parse_output_format(args.format.as_deref())?;
    if args.json {
        if format.is_some() {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        println!("{}", serde_json::to_string_pretty(&expenses_json(&expenses))?);
        return Ok(());
    }

    if expenses.is_empty() {
        if !cli.quiet {
            println!("No expenses found.");
        }
        return Ok(());
    }
    print_expenses(&expenses, format.unwrap_or(OutputFormat::Table));
    Ok(())
}

pub fn handle_edit(cli: &Cli, args: &EditArgs) -> anyhow::Result<()> {
    let mut service = open_service(cli)?;

    let id = parse_expense_id(&args.id)?;
    match service.edit(&id, &args.name, args.amount)? {
        Some(expense) => {
            if !cli.quiet {
                println!(
                    "Updated expense: {} ({})",
                    expense.name,
                    format_amount(expense.amount)
                );
            }
            Ok(())
        }
        None => Err(anyhow::anyhow!(
            "Expense {} not found.\nHint: run `expenses list --date <DATE>` to find expense IDs.",
            id
        )),
    }
}

pub fn handle_delete(cli: &Cli, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut service = open_service(cli)?;

    let id = parse_expense_id(&args.id)?;
    match service.delete(&id)? {
        Some(expense) => {
            if !cli.quiet {
                println!("Deleted expense: {}", expense.name);
            }
            Ok(())
        }
        None => Err(anyhow::anyhow!(
            "Expense {} not found.\nHint: run `expenses list --date <DATE>` to find expense IDs.",
            id
        )),
    }
}

pub fn handle_clear_day(cli: &Cli, args: &ClearDayArgs) -> anyhow::Result<()> {
    let mut service = open_service(cli)?;

    let date = parse_date(&args.date)?;
    let removed = service.delete_all_for_date(date)?;

    if !cli.quiet {
        match removed {
            0 => println!("No expenses to remove for {}.", date),
            1 => println!("Removed 1 expense for {}.", date),
            n => println!("Removed {} expenses for {}.", n, date),
        }
    }
    Ok(())
}
