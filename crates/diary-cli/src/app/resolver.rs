//! Path resolution for config and database files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, DiaryConfig};
use crate::constants::DEFAULT_DATABASE_FILE;

/// Resolve the config file path, checking DIARY_CONFIG env var first.
///
/// Returns `None` when no location can be derived (no HOME, no XDG dir).
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(value) = std::env::var("DIARY_CONFIG") {
        if !value.trim().is_empty() {
            return Some(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the database path: flag/env, then config, then `diary.db`.
pub fn resolve_database_path(cli: &Cli, config: &DiaryConfig) -> PathBuf {
    if let Some(path) = cli.database.clone() {
        return path;
    }
    config
        .diary
        .path
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
}
