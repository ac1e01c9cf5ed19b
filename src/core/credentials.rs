use serde::{Deserialize, Serialize};

use crate::core::store::KeyValueStore;

/// Storage slot holding the one account record.
pub const USER_KEY: &str = "collabspaceUser";

/// The single persisted account. Written verbatim from the signup form,
/// replaced wholesale on every successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no stored account")]
    NotFound,
    #[error("stored account is unreadable: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Typed access to the credential slot over any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct CredentialStore<S> {
    kv: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Overwrites the stored record. There is no merge and no
    /// multi-account handling; a second signup replaces the first.
    pub fn save(&mut self, record: &CredentialRecord) -> anyhow::Result<()> {
        let raw = serde_json::to_string(record)?;
        self.kv.set(USER_KEY, &raw)?;
        tracing::info!(email = %record.email, "account saved");
        Ok(())
    }

    /// Loads the stored record. Missing and malformed are distinct,
    /// non-fatal outcomes; login treats either as "no account".
    pub fn load(&self) -> Result<CredentialRecord, LoadError> {
        match self.kv.get(USER_KEY) {
            None => Err(LoadError::NotFound),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }
}
