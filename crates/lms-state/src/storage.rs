//! Durable key-value storage for client state
//!
//! Only two things survive a restart: the bearer token and the theme
//! preference, both stored under fixed keys. The file-backed store is the
//! production implementation; the in-memory one backs tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Storage key for the persisted bearer token
pub const TOKEN_KEY: &str = "authToken";

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Durable string key-value storage
pub trait KvStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value
    fn set(&self, key: &str, value: &str);
    /// Delete a value
    fn remove(&self, key: &str);
}

/// In-memory store used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a persisted token
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(TOKEN_KEY, token);
        store
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.remove(key);
        }
    }
}

/// File-backed store persisting a flat JSON object
///
/// Storage failures are logged and otherwise ignored: losing a persisted
/// token means logging in again, never a crash.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the state file under `state_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or an existing
    /// state file cannot be parsed.
    pub fn open(state_dir: &Path) -> lms_core::Result<Self> {
        std::fs::create_dir_all(state_dir)?;
        let path = state_dir.join("console-state.json");
        let map = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    fn persist(&self, map: &HashMap<String, String>) {
        match serde_json::to_string_pretty(map) {
            Ok(raw) => {
                if let Err(err) = std::fs::write(&self.path, raw) {
                    warn!("failed to persist client state: {err}");
                }
            }
            Err(err) => warn!("failed to serialize client state: {err}"),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_string(), value.to_string());
            self.persist(&map);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.map.lock() {
            map.remove(key);
            self.persist(&map);
        }
    }
}

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme (the fallback for unknown stored values)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Stored wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value, falling back to light
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the persisted theme preference.
pub fn load_theme(store: &dyn KvStore) -> Theme {
    Theme::parse(store.get(THEME_KEY).as_deref())
}

/// Persist a theme preference.
pub fn store_theme(store: &dyn KvStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.set(TOKEN_KEY, "tok");
        assert_eq!(store.get(TOKEN_KEY), Some("tok".to_string()));

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);

        // Removing again is a no-op
        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set(TOKEN_KEY, "persisted-token");
            store.set(THEME_KEY, "dark");
        }

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(TOKEN_KEY), Some("persisted-token".to_string()));
        assert_eq!(load_theme(&reopened), Theme::Dark);

        reopened.remove(TOKEN_KEY);
        let reopened_again = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened_again.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_theme_parse_falls_back_to_light() {
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
        assert_eq!(Theme::parse(Some("solarized")), Theme::Light);
        assert_eq!(Theme::parse(None), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_and_store() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);

        store_theme(&store, Theme::Light.toggled());
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
    }
}
