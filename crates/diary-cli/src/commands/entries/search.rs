use std::io::{BufRead, Write};

use diary_core::storage::StorageEngine;

use crate::console::Console;

use super::list::handle_list;
use super::show::handle_show;

pub fn handle_search<S, R, W>(storage: &mut S, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    let query = console
        .prompt("What are you searching for? ")?
        .unwrap_or_default();
    console.clear()?;
    if query.is_empty() {
        return Ok(());
    }

    let mut results = storage.search_entries(&query)?;
    console.line(&format!("Results found: {}", results.len()))?;
    console.blank()?;

    match results.len() {
        0 => Ok(()),
        1 => {
            let only = results.remove(0);
            handle_show(storage, console, only.id)
        }
        _ => handle_list(storage, console, Some(results)),
    }
}
