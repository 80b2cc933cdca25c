//! Expenses CLI - a personal expense tracker.
//!
//! This is the interaction surface over `expense-core`: it parses input,
//! calls one domain-service operation per command, and renders the result.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Add(args)) => commands::expenses::handle_add(&cli, args),
        Some(Commands::List(args)) => commands::expenses::handle_list(&cli, args),
        Some(Commands::Dates(args)) => commands::report::handle_dates(&cli, args),
        Some(Commands::Search(args)) => commands::expenses::handle_search(&cli, args),
        Some(Commands::Edit(args)) => commands::expenses::handle_edit(&cli, args),
        Some(Commands::Delete(args)) => commands::expenses::handle_delete(&cli, args),
        Some(Commands::ClearDay(args)) => commands::expenses::handle_clear_day(&cli, args),
        Some(Commands::Total(args)) => commands::report::handle_total(&cli, args),
        Some(Commands::Report(args)) => commands::report::handle_report(&cli, args),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

// Logging goes to stderr so stdout stays parseable. Off unless the user
// sets EXPENSES_LOG (or RUST_LOG).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("EXPENSES_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
