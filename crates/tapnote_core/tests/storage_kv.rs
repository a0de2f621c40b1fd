use tapnote_core::{KeyValueStorage, SqliteKeyValueStorage, StorageError};

#[test]
fn get_on_missing_key_returns_none() {
    let mut storage = SqliteKeyValueStorage::open_in_memory().unwrap();
    assert_eq!(storage.get("absent").unwrap(), None);
}

#[test]
fn set_then_get_round_trips_the_value() {
    let mut storage = SqliteKeyValueStorage::open_in_memory().unwrap();
    storage.set("@notes_app", r#"[{"id":"1","value":"x"}]"#).unwrap();
    assert_eq!(
        storage.get("@notes_app").unwrap().as_deref(),
        Some(r#"[{"id":"1","value":"x"}]"#)
    );
}

#[test]
fn set_fully_overwrites_an_existing_key() {
    let mut storage = SqliteKeyValueStorage::open_in_memory().unwrap();
    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn keys_do_not_leak_into_each_other() {
    let mut storage = SqliteKeyValueStorage::open_in_memory().unwrap();
    storage.set("a", "1").unwrap();
    storage.set("b", "2").unwrap();
    assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("notes.sqlite3");

    {
        let mut storage = SqliteKeyValueStorage::open(&db_path).unwrap();
        storage.set("@notes_app", "[]").unwrap();
    }

    let mut reopened = SqliteKeyValueStorage::open(&db_path).unwrap();
    assert_eq!(reopened.get("@notes_app").unwrap().as_deref(), Some("[]"));
}

#[test]
fn database_with_newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("future.sqlite3");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.pragma_update(None, "user_version", 99).unwrap();
    }

    let err = SqliteKeyValueStorage::open(&db_path).unwrap_err();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchemaVersion { db_version: 99, .. }
    ));
}
