//! Diary CLI - a small, local, menu-driven personal diary
//!
//! Entries live in a single SQLite file. The program is one interactive
//! loop: add, browse, search and delete entries from a text menu.

use std::io;

use clap::Parser;
use tracing::debug;

use diary_core::storage::{SqliteStorage, StorageEngine};

mod app;
mod cli;
mod commands;
mod config;
mod console;
mod constants;
mod logging;
mod session;
mod ui;

use app::AppContext;
use cli::Cli;
use console::Console;
use logging::init_logging;
use session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::load(&cli)?;
    init_logging(cli.verbose, ctx.log_level());

    let db_path = ctx.database_path();
    let storage = SqliteStorage::open(&db_path).map_err(|e| {
        anyhow::anyhow!("Failed to open diary at {}: {}", db_path.display(), e)
    })?;
    debug!(path = %db_path.display(), "diary opened");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock(), ctx.ui_context());

    Session::new(storage, console).run()
}
