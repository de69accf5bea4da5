//! Application context for the Diary CLI.
//!
//! Bundles parsed CLI arguments with the loaded config file so startup
//! code asks one place for paths and UI preferences.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{load_config, DiaryConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_database_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: DiaryConfig,
}

impl<'a> AppContext<'a> {
    /// Load configuration and build the context.
    ///
    /// A missing config file means defaults; an unreadable one is an error.
    pub fn load(cli: &'a Cli) -> anyhow::Result<Self> {
        let config_path = resolve_config_path();
        let config = load_config(config_path.as_deref())?;
        Ok(Self { cli, config })
    }

    /// Configured log level, if any.
    pub fn log_level(&self) -> Option<&str> {
        self.config.log.level.as_deref()
    }

    /// Where the diary database lives.
    pub fn database_path(&self) -> PathBuf {
        let path = resolve_database_path(self.cli, &self.config);
        debug!(path = %path.display(), "resolved database path");
        path
    }

    /// Terminal context honoring flags and config preferences.
    pub fn ui_context(&self) -> UiContext {
        UiContext::from_env(
            self.cli.no_clear,
            self.config.ui.clear_screen,
            self.config.ui.color,
        )
    }
}
