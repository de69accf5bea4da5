//! # Diary Core
//!
//! Core library for Diary - a small, local, CLI-first personal diary.
//!
//! This crate provides the entry model, the storage abstraction and its
//! SQLite implementation, independent of the interactive menu.
//!
//! ## Architecture
//!
//! - **storage**: `StorageEngine` trait, entry types, SQLite backend
//! - **error**: Error hierarchy shared by every storage operation

pub mod error;
pub mod storage;

pub use error::{DiaryError, Result};
pub use storage::StorageEngine;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
