//! Application wiring: database path resolution and service construction.

use std::path::PathBuf;

use expense_core::{ExpenseService, SqliteStore};

use crate::cli::Cli;
use crate::config::{default_config_path, default_database_path, read_config};

/// Open the expense database and wrap it in a domain service.
pub fn open_service(cli: &Cli) -> anyhow::Result<ExpenseService<SqliteStore>> {
    let path = resolve_database_path(cli)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create data directory {}: {}", parent.display(), e)
        })?;
    }
    let store = SqliteStore::open(&path)?;
    Ok(ExpenseService::new(store))
}

/// Resolve the database path: --file flag (or EXPENSES_PATH env via clap),
/// then the config file, then the XDG data-dir default.
pub fn resolve_database_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.clone() {
        return Ok(PathBuf::from(path));
    }

    let config_path = default_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        if let Some(path) = config.database.path {
            return Ok(PathBuf::from(path));
        }
    }

    default_database_path()
}
