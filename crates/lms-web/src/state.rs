//! Application state management

use lms_client::ApiClient;
use lms_core::Config;
use lms_state::storage::FileStore;
use lms_state::{KvStore, SessionStore, Theme};
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub client: ApiClient,
    /// The admin session (token + identity)
    pub session: SessionStore,
    /// Durable preferences (theme, persisted token)
    pub prefs: Arc<FileStore>,
}

impl AppState {
    /// Create new application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the state directory cannot be opened.
    pub fn new(config: Config) -> lms_core::Result<Self> {
        let client = ApiClient::from_config(&config.api);
        let prefs = Arc::new(FileStore::open(&config.storage.state_dir)?);
        let session = SessionStore::new(client.clone(), Arc::clone(&prefs) as Arc<dyn KvStore>);

        Ok(Self {
            config,
            client,
            session,
            prefs,
        })
    }

    /// The persisted theme preference
    #[must_use]
    pub fn theme(&self) -> Theme {
        lms_state::storage::load_theme(self.prefs.as_ref())
    }
}
