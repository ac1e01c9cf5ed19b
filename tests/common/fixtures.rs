use collabspace::{CredentialRecord, CredentialStore, KeyValueStore, MemoryStore, Task, USER_KEY};

/// The record used across the auth tests; matches the password rules of
/// both forms.
pub fn sample_record() -> CredentialRecord {
    CredentialRecord {
        name: "Amina Ahmad".to_string(),
        email: "a@b.com".to_string(),
        password: "Abc123!@".to_string(),
    }
}

/// A credential store with nothing saved yet.
pub fn empty_store() -> CredentialStore<MemoryStore> {
    CredentialStore::new(MemoryStore::new())
}

/// A credential store already holding `record`.
pub fn store_with(record: &CredentialRecord) -> CredentialStore<MemoryStore> {
    let mut store = CredentialStore::new(MemoryStore::new());
    store
        .save(record)
        .expect("saving to a memory store cannot fail");
    store
}

/// A credential store whose slot holds bytes that do not parse as a
/// record.
pub fn corrupted_store() -> CredentialStore<MemoryStore> {
    let mut kv = MemoryStore::new();
    kv.set(USER_KEY, "{not json")
        .expect("saving to a memory store cannot fail");
    CredentialStore::new(kv)
}

/// Checklist entries with the given completion flags.
pub fn tasks_with(flags: &[bool]) -> Vec<Task> {
    flags
        .iter()
        .enumerate()
        .map(|(index, done)| Task {
            id: index as i64 + 1,
            text: format!("Task {}", index + 1),
            done: *done,
            assigned_to: "Amina".to_string(),
        })
        .collect()
}
