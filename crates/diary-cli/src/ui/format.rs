//! String formatting utilities for the listing and detail views.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use diary_core::storage::Entry;

use crate::constants::PREVIEW_CHARS;

/// Take at most `max_chars` characters from `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// One-line preview of an entry for the listing view.
///
/// The first line is cut to `PREVIEW_CHARS` characters. "..." marks that
/// something was left out: a longer first line or further lines.
pub fn preview(entry: &Entry) -> String {
    let first_line = entry.first_line();
    let mut out = truncate_chars(first_line, PREVIEW_CHARS);
    if first_line.chars().count() > PREVIEW_CHARS || entry.is_multiline() {
        out.push_str("...");
    }
    out
}

/// Timestamp as shown in the listing view, e.g. "01/03/2024 09:30".
pub fn list_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Timestamp as shown in the detail view, e.g. "Friday March 01, 2024 09:30AM".
pub fn detail_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%A %B %d, %Y %I:%M%p").to_string()
}

/// A rule of "=" as wide as `heading`.
pub fn underline(heading: &str) -> String {
    "=".repeat(heading.chars().count())
}

/// One numbered line of the listing view: "n | timestamp | preview".
pub fn list_row<Tz: TimeZone>(number: usize, entry: &Entry, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{} | {} | {}",
        number,
        list_timestamp(&entry.timestamp.with_timezone(tz)),
        preview(entry)
    )
}
