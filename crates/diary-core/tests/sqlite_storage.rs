use diary_core::storage::{EntryFilter, NewEntry, SqliteStorage, StorageEngine};
use tempfile::tempdir;

#[test]
fn test_open_creates_file_and_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("diary.db");

    let storage = SqliteStorage::open(&path).expect("first open should succeed");
    assert!(path.exists());
    assert_eq!(storage.count_entries().expect("count"), 0);
    drop(storage);

    let storage = SqliteStorage::open(&path).expect("second open should succeed");
    assert_eq!(storage.count_entries().expect("count"), 0);
}

#[test]
fn test_open_creates_missing_parent_directory() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("deeper").join("diary.db");

    SqliteStorage::open(&path).expect("open should succeed");
    assert!(path.exists());
}

#[test]
fn test_entries_persist_across_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("diary.db");

    let id = {
        let mut storage = SqliteStorage::open(&path).expect("open");
        storage
            .insert_entry(&NewEntry::new("Hello\nWorld"))
            .expect("insert should succeed")
    };

    let storage = SqliteStorage::open(&path).expect("reopen");
    let entry = storage
        .get_entry(id)
        .expect("get should succeed")
        .expect("entry should exist");
    assert_eq!(entry.content, "Hello\nWorld");
    assert_eq!(storage.list_entries(&EntryFilter::new()).expect("list").len(), 1);
}

#[test]
fn test_ids_keep_growing_after_delete_all_and_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("diary.db");

    let last = {
        let mut storage = SqliteStorage::open(&path).expect("open");
        storage.insert_entry(&NewEntry::new("one")).expect("insert");
        let last = storage.insert_entry(&NewEntry::new("two")).expect("insert");
        assert_eq!(storage.delete_all_entries().expect("delete all"), 2);
        last
    };

    let mut storage = SqliteStorage::open(&path).expect("reopen");
    let next = storage.insert_entry(&NewEntry::new("three")).expect("insert");
    assert!(next > last);
    assert_eq!(storage.id_bounds().expect("bounds"), Some((next, next)));
}

#[test]
fn test_single_delete_removes_only_that_id() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("diary.db");
    let mut storage = SqliteStorage::open(&path).expect("open");

    let keep = storage.insert_entry(&NewEntry::new("keep me")).expect("insert");
    let remove = storage.insert_entry(&NewEntry::new("remove me")).expect("insert");

    assert!(storage.delete_entry(remove).expect("delete"));
    assert_eq!(storage.count_entries().expect("count"), 1);
    assert!(storage.get_entry(remove).expect("get").is_none());
    assert!(storage.get_entry(keep).expect("get").is_some());
}
