//! Entry row type for database queries.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{DiaryError, Result};
use crate::storage::types::Entry;

/// Columns selected for every entry query, in `EntryRow` field order.
pub const ENTRY_COLUMNS: &str = "id, content, timestamp";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub content: String,
    pub timestamp: String,
}

impl EntryRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = DiaryError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| DiaryError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Entry {
            id: row.id,
            content: row.content,
            timestamp,
        })
    }
}

/// Encode a timestamp in a fixed-width form so text order matches time order.
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_timestamp_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(encode_timestamp(&whole), "2024-01-02T03:04:05.000000Z");
    }

    #[test]
    fn test_row_converts_to_entry() {
        let row = EntryRow {
            id: 7,
            content: "Hello".to_string(),
            timestamp: "2024-01-02T03:04:05.000000Z".to_string(),
        };
        let entry: Entry = row.try_into().unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
        );
    }

    #[test]
    fn test_invalid_timestamp_is_storage_error() {
        let row = EntryRow {
            id: 1,
            content: "Hello".to_string(),
            timestamp: "yesterday".to_string(),
        };
        let result: Result<Entry> = row.try_into();
        assert!(matches!(result, Err(DiaryError::Storage(_))));
    }
}
