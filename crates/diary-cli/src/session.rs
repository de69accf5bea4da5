//! The interactive main-menu loop.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::info;

use diary_core::StorageEngine;

use crate::commands::Command;
use crate::console::Console;

/// One interactive run over an open store.
pub struct Session<S, R, W> {
    storage: S,
    console: Console<R, W>,
}

impl<S, R, W> Session<S, R, W>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    pub fn new(storage: S, console: Console<R, W>) -> Self {
        Self { storage, console }
    }

    /// Show the menu until the user quits or input is closed.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("session started");
        self.console.clear()?;

        loop {
            self.print_menu()?;

            let Some(choice) = self.console.prompt("\nAction: ")? else {
                info!("input closed, leaving");
                return Ok(());
            };
            let choice = choice.trim().to_lowercase();
            self.console.clear()?;

            let Some(command) = Command::from_key(&choice) else {
                continue;
            };
            if let ControlFlow::Break(()) = command.run(&mut self.storage, &mut self.console)? {
                info!("session finished");
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        let count = self.storage.count_entries()?;
        self.console
            .line(&format!("There are {} entries in the database.", count))?;
        self.console.blank()?;
        for command in Command::ALL {
            self.console
                .line(&format!("{}) {}", command.key(), command.description()))?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (S, Console<R, W>) {
        (self.storage, self.console)
    }
}
