//! Storage engine trait definition.
//!
//! The `StorageEngine` trait defines the interface every diary backend
//! implements. The interactive session only ever talks to this trait.

use std::path::Path;

use super::types::{Entry, EntryFilter, NewEntry};
use crate::error::Result;

/// Storage engine interface for a diary store.
///
/// All implementations must ensure:
/// - Ids are assigned by the store and strictly increase in creation order
/// - Ids are never reused after deletion
/// - Entries are never modified after creation
pub trait StorageEngine: Send + Sync {
    /// Open the store at `path`, creating it if it does not exist.
    ///
    /// Safe to call on every run: schema creation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the file cannot be created or opened.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    // --- Entry operations ---

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the id of the created entry.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Validation` if the content is empty after trimming.
    fn insert_entry(&mut self, entry: &NewEntry) -> Result<i64>;

    /// Get an entry by id.
    ///
    /// Returns `Ok(None)` if no entry has this id.
    fn get_entry(&self, id: i64) -> Result<Option<Entry>>;

    /// List entries matching the filter.
    ///
    /// Entries are returned newest first (timestamp descending, then id
    /// descending).
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Find entries whose content contains `query` (case-sensitive).
    ///
    /// Results use the same order as `list_entries`.
    fn search_entries(&self, query: &str) -> Result<Vec<Entry>>;

    /// Total number of entries.
    fn count_entries(&self) -> Result<usize>;

    /// Smallest and largest id currently stored, or `None` when empty.
    fn id_bounds(&self) -> Result<Option<(i64, i64)>>;

    /// The entry with the smallest id strictly greater than `id`.
    fn newer_entry(&self, id: i64) -> Result<Option<Entry>>;

    /// The entry with the largest id strictly less than `id`.
    fn older_entry(&self, id: i64) -> Result<Option<Entry>>;

    // --- Deletion ---

    /// Delete one entry. Returns `true` if a row was removed.
    fn delete_entry(&mut self, id: i64) -> Result<bool>;

    /// Delete every entry. Returns the number of rows removed.
    fn delete_all_entries(&mut self) -> Result<usize>;
}
