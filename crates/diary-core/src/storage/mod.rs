//! Storage abstraction for Diary.
//!
//! This module defines the `StorageEngine` trait and the entry types used to
//! talk to a diary store.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - SQLite file (`SqliteStorage`), one table of entries
//!
//! Entries are append-only: created or deleted, never updated.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{Entry, EntryFilter, NewEntry};
