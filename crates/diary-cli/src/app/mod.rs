//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path resolution for config and database files
//! - The startup context combining flags and config

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
