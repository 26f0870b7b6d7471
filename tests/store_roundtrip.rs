// tests/store_roundtrip.rs
//
// Result store lifecycle against both the file-backed persistence and the
// in-memory fake: rehydration, empty-vs-failed semantics, reset.

use std::fs;

use serde_json::json;

use lead_finder::store::{
    FetchStatus, FilePersistence, MemoryPersistence, Persistence, Record, ResultStore,
};

fn rec(v: serde_json::Value) -> Record {
    v.as_object().expect("object literal").clone()
}

fn sample() -> Vec<Record> {
    vec![
        rec(json!({"name": "Jo", "email": "a@b.com"})),
        rec(json!({"name": "Sam", "email": null})),
    ]
}

#[test]
fn success_then_rehydrate_restores_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut store = ResultStore::new(Box::new(FilePersistence::new(&path)));
    store.on_fetch_start();
    store.on_fetch_success(sample());
    assert_eq!(store.snapshot().status, FetchStatus::Succeeded);

    // Simulate a restart: a fresh store over the same file.
    let mut reborn = ResultStore::new(Box::new(FilePersistence::new(&path)));
    reborn.rehydrate();

    assert_eq!(reborn.snapshot().status, FetchStatus::Succeeded);
    assert_eq!(reborn.snapshot().records, sample());
    assert!(reborn.snapshot().error.is_none());
}

#[test]
fn empty_success_is_succeeded_not_idle() {
    let mut store = ResultStore::new(Box::new(MemoryPersistence::default()));
    store.on_fetch_start();
    store.on_fetch_success(Vec::new());

    let set = store.snapshot();
    assert_eq!(set.status, FetchStatus::Succeeded);
    assert!(set.records.is_empty());
    assert!(set.error.is_none());
}

#[test]
fn rehydrated_empty_cache_is_idle() {
    // A durable copy holding zero records starts life Idle, not Succeeded.
    let persist = MemoryPersistence::default();
    persist.save(&[]).unwrap();

    let mut store = ResultStore::new(Box::new(persist));
    store.rehydrate();
    assert_eq!(store.snapshot().status, FetchStatus::Idle);
}

#[test]
fn failure_keeps_stale_records() {
    let mut store = ResultStore::new(Box::new(MemoryPersistence::default()));
    store.on_fetch_success(sample());

    store.on_fetch_start();
    assert_eq!(store.snapshot().status, FetchStatus::Loading);
    assert!(store.snapshot().error.is_none());

    store.on_fetch_failure("HTTP 502");
    let set = store.snapshot();
    assert_eq!(set.status, FetchStatus::Failed);
    assert_eq!(set.error.as_deref(), Some("HTTP 502"));
    // Stale-but-available beats gone.
    assert_eq!(set.records, sample());
}

#[test]
fn reset_clears_memory_and_durable_copy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut store = ResultStore::new(Box::new(FilePersistence::new(&path)));
    store.on_fetch_success(sample());
    assert!(path.exists());

    store.reset();
    let set = store.snapshot();
    assert_eq!(set.status, FetchStatus::Idle);
    assert!(set.records.is_empty());
    assert!(set.error.is_none());
    assert!(!path.exists());
}

#[test]
fn corrupt_cache_rehydrates_empty_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    fs::write(&path, "not json{{{").unwrap();

    let mut store = ResultStore::new(Box::new(FilePersistence::new(&path)));
    store.rehydrate();

    let set = store.snapshot();
    assert_eq!(set.status, FetchStatus::Idle);
    assert!(set.records.is_empty());
}

#[test]
fn missing_cache_rehydrates_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never_written.json");

    let mut store = ResultStore::new(Box::new(FilePersistence::new(&path)));
    store.rehydrate();
    assert_eq!(store.snapshot().status, FetchStatus::Idle);
}

#[test]
fn records_persist_verbatim() {
    // No transformation, no deduplication: duplicates and odd values ride
    // through the cache untouched.
    let dup = rec(json!({"name": "Jo", "score": 3.5}));
    let records = vec![dup.clone(), dup.clone()];

    let persist = MemoryPersistence::default();
    persist.save(&records).unwrap();
    assert_eq!(persist.load().unwrap().unwrap(), records);
}
