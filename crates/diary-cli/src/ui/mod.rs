//! UI primitives for the Diary CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, screen clearing)
//! - **Theme**: Styling helpers built on `owo-colors`
//! - **Format**: Pure string helpers for listing and detail views

mod context;
pub mod format;
pub mod theme;

pub use context::UiContext;

pub use format::{detail_timestamp, list_row, underline};
