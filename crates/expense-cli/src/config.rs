//! Optional TOML configuration for the CLI.
//!
//! Only one setting exists today: the default database path. The core
//! library never reads configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpensesConfig {
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub path: Option<String>,
}

/// Resolve the config file path, checking EXPENSES_CONFIG env var first.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("EXPENSES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Default database location when neither flag, env, nor config names one.
pub fn default_database_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("expenses.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<ExpensesConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expenses"));
        }
    }
    Ok(home_dir()?.join(".config").join("expenses"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("expenses"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("expenses"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory (HOME is unset)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_with_database_path() {
        let config: ExpensesConfig =
            toml::from_str("[database]\npath = \"/tmp/expenses.db\"\n").unwrap();
        assert_eq!(config.database.path.as_deref(), Some("/tmp/expenses.db"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: ExpensesConfig = toml::from_str("").unwrap();
        assert!(config.database.path.is_none());
    }
}
