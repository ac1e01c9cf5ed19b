use crate::core::credentials::CredentialStore;
use crate::core::store::JsonFileStore;

/// State shared across screens. Screens reach persisted data only
/// through the injected credential store; everything else they own
/// themselves and drop on navigation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub credentials: CredentialStore<JsonFileStore>,
}

impl AppState {
    pub fn new(credentials: CredentialStore<JsonFileStore>) -> Self {
        Self { credentials }
    }
}
