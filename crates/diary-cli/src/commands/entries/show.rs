//! Single-entry detail view with newer/older navigation.

use std::io::{BufRead, Write};

use chrono::Local;

use diary_core::storage::StorageEngine;

use crate::console::Console;
use crate::ui::theme::{styled, styles};
use crate::ui::{detail_timestamp, underline};

use super::delete::handle_delete_entry;

/// What the user picked in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    Newer,
    Older,
    Delete,
    MainMenu,
}

impl DetailAction {
    /// Resolve normalized input. Navigation keys only count when offered.
    fn from_input(input: &str, has_newer: bool, has_older: bool) -> Self {
        match input {
            "n" if has_newer => DetailAction::Newer,
            "o" if has_older => DetailAction::Older,
            "d" => DetailAction::Delete,
            _ => DetailAction::MainMenu,
        }
    }
}

/// Show entry `id`, then follow newer/older links until the user leaves.
pub fn handle_show<S, R, W>(
    storage: &mut S,
    console: &mut Console<R, W>,
    id: i64,
) -> anyhow::Result<()>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    let mut current = id;

    loop {
        let Some(entry) = storage.get_entry(current)? else {
            return Ok(());
        };
        let (min_id, max_id) = storage.id_bounds()?.unwrap_or((entry.id, entry.id));
        let has_newer = entry.id != max_id;
        let has_older = entry.id != min_id;

        let heading = detail_timestamp(&entry.timestamp.with_timezone(&Local));
        let rule = underline(&heading);
        let color = console.ui().color;
        console.line(&styled(&heading, styles::bold(), color))?;
        console.line(&rule)?;
        console.line(&entry.content)?;
        console.line(&rule)?;
        console.blank()?;

        if has_newer {
            console.line("n) Newer entry")?;
        }
        if has_older {
            console.line("o) Older entry")?;
        }
        console.line("d) Delete entry")?;
        console.line("q) Main menu")?;

        let input = console
            .prompt("\nAction: ")?
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        console.clear()?;

        let next = match DetailAction::from_input(&input, has_newer, has_older) {
            DetailAction::Newer => storage.newer_entry(entry.id)?,
            DetailAction::Older => storage.older_entry(entry.id)?,
            DetailAction::Delete => return handle_delete_entry(storage, console, entry.id),
            DetailAction::MainMenu => return Ok(()),
        };

        match next {
            Some(next) => current = next.id,
            None => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_only_when_offered() {
        assert_eq!(DetailAction::from_input("n", true, true), DetailAction::Newer);
        assert_eq!(DetailAction::from_input("n", false, true), DetailAction::MainMenu);
        assert_eq!(DetailAction::from_input("o", true, true), DetailAction::Older);
        assert_eq!(DetailAction::from_input("o", true, false), DetailAction::MainMenu);
    }

    #[test]
    fn test_delete_always_available() {
        assert_eq!(DetailAction::from_input("d", false, false), DetailAction::Delete);
    }

    #[test]
    fn test_anything_else_returns_to_menu() {
        assert_eq!(DetailAction::from_input("q", true, true), DetailAction::MainMenu);
        assert_eq!(DetailAction::from_input("", true, true), DetailAction::MainMenu);
        assert_eq!(DetailAction::from_input("next", true, true), DetailAction::MainMenu);
    }
}
