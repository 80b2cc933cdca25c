use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use expense_core::VERSION;

/// Expenses - a personal expense tracker for the command line
#[derive(Parser)]
#[command(name = "expenses")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the expense database
    #[arg(short, long, global = true, env = "EXPENSES_PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Expense name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Amount spent
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Date to list (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `dates` command
#[derive(Args)]
pub struct DatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Name substring to search for (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Expense ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New expense name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// New amount
    #[arg(value_name = "AMOUNT")]
    pub amount: f64,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Expense ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `clear-day` command
#[derive(Args)]
pub struct ClearDayArgs {
    /// Date to clear (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,
}

/// Arguments for the `total` command
#[derive(Args)]
pub struct TotalArgs {
    /// Date to total (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses for a date (today by default)
    List(ListArgs),

    /// List every date holding at least one expense
    Dates(DatesArgs),

    /// Search expenses by name substring
    Search(SearchArgs),

    /// Edit an expense's name and amount
    Edit(EditArgs),

    /// Delete a single expense
    Delete(DeleteArgs),

    /// Delete every expense for a date
    #[command(name = "clear-day")]
    ClearDay(ClearDayArgs),

    /// Show the total spent on a date
    Total(TotalArgs),

    /// Show the highest- and lowest-spending days
    Report(ReportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
