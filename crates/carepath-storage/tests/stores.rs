use std::collections::BTreeMap;

use carepath_storage::error::StorageError;
use carepath_storage::file::FileStore;
use carepath_storage::memory::MemoryStore;
use carepath_storage::state::{load_state, save_state};
use carepath_storage::store::KeyValueStore;

#[test]
fn missing_key_reads_as_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("wellness_plans").unwrap(), None);
    let loaded: Option<Vec<String>> = load_state(&store, "wellness_plans").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn state_round_trips_through_memory_store() {
    let store = MemoryStore::new();
    let mut value = BTreeMap::new();
    value.insert("frequency".to_string(), "432 Hz".to_string());

    save_state(&store, "global_clinical_state", &value).unwrap();
    let loaded: Option<BTreeMap<String, String>> =
        load_state(&store, "global_clinical_state").unwrap();
    assert_eq!(loaded, Some(value));
}

#[test]
fn corrupt_json_is_a_serialization_error() {
    let store = MemoryStore::new();
    store.set("wellness_plans", "{not json").unwrap();
    let result: Result<Option<Vec<String>>, _> = load_state(&store, "wellness_plans");
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

#[test]
fn keys_outside_the_safe_alphabet_are_rejected() {
    let store = MemoryStore::new();
    assert!(matches!(
        store.set("../escape", "{}"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
}

#[test]
fn handles_share_data_but_not_writer_ids() {
    let first = MemoryStore::new();
    let second = first.handle();
    assert_ne!(first.writer_id(), second.writer_id());

    let mut changes = first.subscribe();
    second.set("wellness_plans", "[]").unwrap();

    assert_eq!(first.get("wellness_plans").unwrap().as_deref(), Some("[]"));
    let change = changes.try_recv().unwrap();
    assert_eq!(change.key, "wellness_plans");
    assert_eq!(change.writer, second.writer_id());
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileStore::open(dir.path()).unwrap();
        store.set("wellness_plans", "[1,2,3]").unwrap();
    }
    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(
        reopened.get("wellness_plans").unwrap().as_deref(),
        Some("[1,2,3]")
    );
    assert!(dir.path().join("wellness_plans.json").exists());
    assert!(!dir.path().join("wellness_plans.json.tmp").exists());
}

#[test]
fn file_store_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nested")).unwrap();
    store.set("global_clinical_state", r#"{"a":1,"b":2}"#).unwrap();
    store.set("global_clinical_state", r#"{"a":3}"#).unwrap();
    assert_eq!(
        store.get("global_clinical_state").unwrap().as_deref(),
        Some(r#"{"a":3}"#)
    );
}

#[test]
fn file_store_handles_announce_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let other = store.handle();
    let mut changes = store.subscribe();

    other.set("wellness_plans", "[]").unwrap();
    let change = changes.try_recv().unwrap();
    assert_eq!(change.writer, other.writer_id());
    assert_ne!(change.writer, store.writer_id());
}

#[cfg(unix)]
#[test]
fn file_store_writes_owner_only_files() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.set("wellness_plans", "[]").unwrap();
    let mode = std::fs::metadata(dir.path().join("wellness_plans.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn failed_write_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut changes = store.subscribe();

    // A directory in the target's place makes the final rename fail.
    let target = store.dir().join("wellness_plans.json");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("occupied"), "x").unwrap();

    let err = store.set("wellness_plans", "[]").unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
    assert!(!store.dir().join("wellness_plans.json.tmp").exists());
    assert!(target.is_dir());
    assert!(changes.try_recv().is_err());
}
