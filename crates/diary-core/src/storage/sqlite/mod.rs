//! SQLite storage backend.
//!
//! Entries live in a single `entries` table inside one local database file.
//! Ids come from `INTEGER PRIMARY KEY AUTOINCREMENT`, so they only ever grow
//! and are never handed out twice, even after the newest entry is deleted.

mod row;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::error::{DiaryError, Result};
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Entry, EntryFilter, NewEntry};

use row::{encode_timestamp, EntryRow, ENTRY_COLUMNS};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        timestamp TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS entries_timestamp ON entries (timestamp);
"#;

/// SQLite-backed diary store.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open a private in-memory store with the same schema as a file store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DiaryError::Storage("SQLite connection poisoned".to_string()))
    }

    fn query_entries(
        conn: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Entry>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, EntryRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }
        Ok(entries)
    }

    fn query_entry(
        conn: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Option<Entry>> {
        let row = conn.query_row(sql, params, EntryRow::from_row).optional()?;
        row.map(Entry::try_from).transpose()
    }
}

impl StorageEngine for SqliteStorage {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DiaryError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            DiaryError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "opened diary database");
        Self::from_connection(conn)
    }

    fn insert_entry(&mut self, entry: &NewEntry) -> Result<i64> {
        if entry.content.trim().is_empty() {
            return Err(DiaryError::Validation(
                "Entry content cannot be empty".to_string(),
            ));
        }

        let conn = self.lock_conn()?;
        let timestamp = encode_timestamp(&entry.timestamp.unwrap_or_else(Utc::now));
        conn.execute(
            "INSERT INTO entries (content, timestamp) VALUES (?, ?)",
            (&entry.content, &timestamp),
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, "inserted entry");
        Ok(id)
    }

    fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
        let conn = self.lock_conn()?;
        Self::query_entry(
            &conn,
            &format!("SELECT {} FROM entries WHERE id = ?", ENTRY_COLUMNS),
            &[&id],
        )
    }

    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let conn = self.lock_conn()?;

        let mut query = format!("SELECT {} FROM entries", ENTRY_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref needle) = filter.contains {
            // instr() is case-sensitive and treats the needle literally.
            query.push_str(" WHERE instr(content, ?) > 0");
            params.push(Box::new(needle.clone()));
        }

        query.push_str(" ORDER BY timestamp DESC, id DESC");

        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
        Self::query_entries(&conn, &query, &param_refs)
    }

    fn search_entries(&self, query: &str) -> Result<Vec<Entry>> {
        let entries = self.list_entries(&EntryFilter::new().contains(query))?;
        debug!(matches = entries.len(), "searched entries");
        Ok(entries)
    }

    fn count_entries(&self) -> Result<usize> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn id_bounds(&self) -> Result<Option<(i64, i64)>> {
        let conn = self.lock_conn()?;
        let (min, max): (Option<i64>, Option<i64>) =
            conn.query_row("SELECT MIN(id), MAX(id) FROM entries", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;
        Ok(min.zip(max))
    }

    fn newer_entry(&self, id: i64) -> Result<Option<Entry>> {
        let conn = self.lock_conn()?;
        Self::query_entry(
            &conn,
            &format!(
                "SELECT {} FROM entries WHERE id > ? ORDER BY id ASC LIMIT 1",
                ENTRY_COLUMNS
            ),
            &[&id],
        )
    }

    fn older_entry(&self, id: i64) -> Result<Option<Entry>> {
        let conn = self.lock_conn()?;
        Self::query_entry(
            &conn,
            &format!(
                "SELECT {} FROM entries WHERE id < ? ORDER BY id DESC LIMIT 1",
                ENTRY_COLUMNS
            ),
            &[&id],
        )
    }

    fn delete_entry(&mut self, id: i64) -> Result<bool> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM entries WHERE id = ?", [id])?;
        debug!(id, removed, "deleted entry");
        Ok(removed > 0)
    }

    fn delete_all_entries(&mut self) -> Result<usize> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM entries", [])?;
        debug!(removed, "deleted all entries");
        Ok(removed)
    }
}
