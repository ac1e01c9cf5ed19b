pub mod core;

pub use crate::core::auth;
pub use crate::core::credentials::{CredentialRecord, CredentialStore, LoadError, USER_KEY};
pub use crate::core::metrics::{DeadlineReport, DeadlineWindow, TaskItem, TaskStats};
pub use crate::core::model::{
    AttachmentInfo, Comment, Project, ProjectStatus, Task, TaskOverview, TeamMember, UserProfile,
};
pub use crate::core::store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use crate::core::validate::{FieldErrors, fields};

#[cfg(feature = "gui")]
pub mod gui;
