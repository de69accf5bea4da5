use std::io::{BufRead, Write};

use tracing::info;

use diary_core::storage::StorageEngine;

use crate::console::Console;

/// Delete every entry after a `[yN]` confirmation.
pub fn handle_delete_all<S, R, W>(storage: &mut S, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    let confirmed = console.confirm("Are you sure to delete all entries? [yN] ", false)?;
    console.clear()?;
    if !confirmed {
        return Ok(());
    }

    let removed = storage.delete_all_entries()?;
    info!(removed, "deleted all entries");
    console.success("Deleted successfully.")
}

/// Delete entry `id` after a `[yN]` confirmation.
pub fn handle_delete_entry<S, R, W>(
    storage: &mut S,
    console: &mut Console<R, W>,
    id: i64,
) -> anyhow::Result<()>
where
    S: StorageEngine,
    R: BufRead,
    W: Write,
{
    let confirmed = console.confirm("Are you sure to delete the entry? [yN] ", false)?;
    console.clear()?;
    if !confirmed {
        return Ok(());
    }

    storage.delete_entry(id)?;
    info!(id, "deleted entry");
    console.success("Deleted successfully.")
}
