//! Tests for the credential slot over both storage backends.
//!
//! Covers:
//! - Save/load round trips
//! - Missing vs malformed stored data as distinct handled states
//! - Wholesale overwrite on a second signup
//! - File-store persistence through a drop/reopen cycle

mod common;

use collabspace::{CredentialStore, JsonFileStore, KeyValueStore, LoadError, USER_KEY};
use common::*;

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    let record = sample_record();
    let mut store = empty_store();
    store.save(&record)?;

    let loaded = store.load()?;
    assert_eq!(loaded, record);
    Ok(())
}

#[test]
fn test_missing_record_is_not_found() {
    let store = empty_store();
    assert!(matches!(store.load(), Err(LoadError::NotFound)));
}

#[test]
fn test_malformed_record_is_its_own_state() {
    let store = corrupted_store();
    assert!(matches!(store.load(), Err(LoadError::Malformed(_))));
}

#[test]
fn test_second_signup_overwrites_the_first() -> anyhow::Result<()> {
    let first = sample_record();
    let second = CredentialRecord {
        name: "Hussnat".to_string(),
        email: "hussnat@example.com".to_string(),
        password: "Xyz987?&".to_string(),
    };

    let mut store = empty_store();
    store.save(&first)?;
    store.save(&second)?;

    assert_eq!(store.load()?, second);
    Ok(())
}

#[test]
fn test_file_store_persists_across_reopen() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("storage.json");
    let record = sample_record();

    // 1. Save through a file-backed store, then drop it
    {
        let mut store = CredentialStore::new(JsonFileStore::open(&path)?);
        store.save(&record)?;
    }

    // 2. Reopen from the same path and verify the record survived
    {
        let store = CredentialStore::new(JsonFileStore::open(&path)?);
        assert_eq!(store.load()?, record);
    }

    Ok(())
}

#[test]
fn test_file_store_garbage_file_degrades_to_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "??? definitely not json ???")?;

    let store = CredentialStore::new(JsonFileStore::open(&path)?);
    assert!(matches!(store.load(), Err(LoadError::NotFound)));
    Ok(())
}

#[test]
fn test_file_store_keeps_unrelated_keys() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("storage.json");

    let mut kv = JsonFileStore::open(&path)?;
    kv.set("theme", "dark")?;
    kv.set(USER_KEY, "{}")?;
    kv.remove(USER_KEY)?;

    let reopened = JsonFileStore::open(&path)?;
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    assert_eq!(reopened.get(USER_KEY), None);
    Ok(())
}
