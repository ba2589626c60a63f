// src/tests/store_tests.rs
use crate::store::{JsonFileStore, SeenStore};
use crate::tests::utils::set;
use std::fs;
use std::path::PathBuf;

/// Fresh on-disk store under the system temp dir, one file per test.
fn temp_store(name: &str) -> (JsonFileStore, PathBuf) {
    let path = std::env::temp_dir().join(format!("seen_{}_{}.json", name, std::process::id()));
    let _ = fs::remove_file(&path);
    (JsonFileStore::new(&path), path)
}

#[test]
fn missing_file_loads_as_empty_set() {
    let (store, path) = temp_store("missing");

    let seen = store.load().expect("load should succeed");

    assert!(seen.is_empty());
    assert!(!path.exists());
}

#[test]
fn corrupt_file_loads_as_empty_set() {
    let (store, path) = temp_store("corrupt");
    fs::write(&path, "{ not json ]").expect("write corrupt file");

    let seen = store.load().expect("corrupt state must not be fatal");

    assert!(seen.is_empty());
    let _ = fs::remove_file(&path);
}

#[test]
fn save_then_load_round_trips() {
    let (store, path) = temp_store("round_trip");

    store
        .save(&set(&["https://streeteasy.com/building/a/1", "b"]))
        .expect("save should succeed");
    let seen = store.load().expect("load should succeed");

    assert_eq!(seen, set(&["https://streeteasy.com/building/a/1", "b"]));
    let _ = fs::remove_file(&path);
}

#[test]
fn save_writes_sorted_ids() {
    let (store, path) = temp_store("sorted");

    store.save(&set(&["c", "a", "b"])).expect("save should succeed");

    let data = fs::read_to_string(&path).expect("state file exists");
    let expected = serde_json::to_string_pretty(&vec!["a", "b", "c"]).unwrap();
    assert_eq!(data, expected);
    let _ = fs::remove_file(&path);
}

#[test]
fn repeated_save_of_same_set_is_byte_identical() {
    let (store, path) = temp_store("deterministic");

    store.save(&set(&["b", "a"])).expect("first save");
    let first = fs::read(&path).expect("state file exists");

    store.save(&set(&["a", "b"])).expect("second save");
    let second = fs::read(&path).expect("state file exists");

    assert_eq!(first, second);
    let _ = fs::remove_file(&path);
}

#[test]
fn save_replaces_rather_than_appends() {
    let (store, path) = temp_store("replace");

    store.save(&set(&["a"])).expect("first save");
    store.save(&set(&["a", "b"])).expect("second save");

    let seen = store.load().expect("load should succeed");
    assert_eq!(seen, set(&["a", "b"]));

    // No leftover temp file from the rename dance.
    assert!(!path.with_extension("json.tmp").exists());
    let _ = fs::remove_file(&path);
}
