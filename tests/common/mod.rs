mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from collabspace for tests
pub use collabspace::{
    CredentialRecord, CredentialStore, DeadlineWindow, FieldErrors, JsonFileStore, LoadError,
    MemoryStore, Task, TaskOverview, fields,
};
