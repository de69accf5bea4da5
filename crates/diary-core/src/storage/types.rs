//! Core data types for the storage layer.

use chrono::{DateTime, Utc};

/// A diary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Store-assigned identifier, increasing in creation order
    pub id: i64,

    /// Entry text (may span several lines)
    pub content: String,

    /// When this entry was created
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// First line of the content, or the empty string.
    pub fn first_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }

    /// Whether the content spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.content.lines().nth(1).is_some()
    }
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Entry text
    pub content: String,

    /// Optional explicit creation time (defaults to now)
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Filter for querying entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-sensitive substring the content must contain
    pub contains: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(content: &str) -> Entry {
        Entry {
            id: 1,
            content: content.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_first_line_and_multiline() {
        let single = entry("Just one line");
        assert_eq!(single.first_line(), "Just one line");
        assert!(!single.is_multiline());

        let multi = entry("Hello\nWorld");
        assert_eq!(multi.first_line(), "Hello");
        assert!(multi.is_multiline());
    }

    #[test]
    fn test_crlf_content_counts_as_multiline() {
        let multi = entry("Hello\r\nWorld");
        assert_eq!(multi.first_line(), "Hello");
        assert!(multi.is_multiline());
    }

    #[test]
    fn test_new_entry_builder() {
        let at = Utc.with_ymd_and_hms(2023, 12, 24, 18, 0, 0).unwrap();
        let entry = NewEntry::new("Christmas eve").with_timestamp(at);

        assert_eq!(entry.content, "Christmas eve");
        assert_eq!(entry.timestamp, Some(at));
        assert!(NewEntry::new("now").timestamp.is_none());
    }

    #[test]
    fn test_entry_filter_builder() {
        assert!(EntryFilter::new().contains.is_none());

        let filter = EntryFilter::new().contains("coffee");
        assert_eq!(filter.contains, Some("coffee".to_string()));
    }
}
