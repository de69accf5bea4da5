//! Constants used throughout the CLI.

/// Database file used when neither a flag nor the config names one.
pub const DEFAULT_DATABASE_FILE: &str = "diary.db";

/// Characters of an entry's first line shown in the listing view.
pub const PREVIEW_CHARS: usize = 50;

/// Key combination that ends multi-line input on this platform.
#[cfg(windows)]
pub const END_OF_INPUT_KEYS: &str = "ctrl + z";
#[cfg(not(windows))]
pub const END_OF_INPUT_KEYS: &str = "ctrl + d";
