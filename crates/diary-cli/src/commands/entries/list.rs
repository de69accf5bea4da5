use std::io::{BufRead, Write};

use chrono::Local;

use diary_core::storage::{Entry, EntryFilter, StorageEngine};

use crate::console::Console;
use crate::ui::list_row;

use super::show::handle_show;

/// List `entries` (all entries, newest first, when `None`) and let the user
/// open one of them.
pub fn handle_list<S, R, W>(
    storage: &mut S,
    console: &mut Console<R, W>,
    entries: Option<Vec<Entry>>,
) -> anyhow::Result<()>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    let entries = match entries {
        Some(entries) => entries,
        None => storage.list_entries(&EntryFilter::new())?,
    };
    if entries.is_empty() {
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        console.line(&list_row(index + 1, entry, &Local))?;
    }

    let answer = console.prompt(&format!("\nSelect entry [1-{}] ", entries.len()))?;
    console.clear()?;

    match answer.and_then(|value| parse_selection(&value, entries.len())) {
        Some(index) => handle_show(storage, console, entries[index].id),
        None => Ok(()),
    }
}

/// Map a 1-based selection to an index, or `None` if it is not a number in
/// `1..=count`.
fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    if (1..=count).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_in_range() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection(" 3 ", 3), Some(2));
    }

    #[test]
    fn test_parse_selection_out_of_range() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
    }

    #[test]
    fn test_parse_selection_not_a_number() {
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("two", 3), None);
        assert_eq!(parse_selection("1.5", 3), None);
    }
}
