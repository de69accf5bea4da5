use std::io::{BufRead, Write};

use tracing::info;

use diary_core::storage::{NewEntry, StorageEngine};

use crate::console::Console;
use crate::constants::END_OF_INPUT_KEYS;

pub fn handle_add<S, R, W>(storage: &mut S, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    console.line(&format!(
        "Type your entry. Press {} to finish.",
        END_OF_INPUT_KEYS
    ))?;
    console.blank()?;

    let captured = console.read_until_eof()?;
    let content = captured.trim();
    if content.is_empty() {
        return Ok(());
    }

    let save = console.confirm("\nSave entry? [Yn] ", true)?;
    console.clear()?;
    if !save {
        return Ok(());
    }

    let id = storage.insert_entry(&NewEntry::new(content))?;
    info!(id, "saved entry");
    console.success("Saved successfully.")
}
