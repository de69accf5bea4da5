//! Main-menu commands and their handlers.

pub mod entries;

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use diary_core::StorageEngine;

use crate::console::Console;

/// A main-menu command, selected by a single-character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    View,
    Search,
    DeleteAll,
    Quit,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::View,
        Command::Search,
        Command::DeleteAll,
        Command::Quit,
    ];

    pub fn key(self) -> char {
        match self {
            Command::Add => 'a',
            Command::View => 'v',
            Command::Search => 's',
            Command::DeleteAll => 'd',
            Command::Quit => 'q',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Add => "Add entry",
            Command::View => "View entries",
            Command::Search => "Search entries",
            Command::DeleteAll => "Delete entries",
            Command::Quit => "Quit",
        }
    }

    /// Resolve normalized user input (trimmed, lower-case) to a command.
    pub fn from_key(input: &str) -> Option<Command> {
        let mut chars = input.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Command::ALL.into_iter().find(|command| command.key() == key)
    }

    /// Run the command against `storage`. `Break` means leave the menu.
    pub fn run<S, R, W>(
        self,
        storage: &mut S,
        console: &mut Console<R, W>,
    ) -> anyhow::Result<ControlFlow<()>>
    where
        S: StorageEngine,
        R: BufRead,
        W: Write,
    {
        match self {
            Command::Add => entries::handle_add(storage, console)?,
            Command::View => entries::handle_list(storage, console, None)?,
            Command::Search => entries::handle_search(storage, console)?,
            Command::DeleteAll => entries::handle_delete_all(storage, console)?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }
}
