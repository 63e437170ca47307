//! Fail-open persisted preferences.
//!
//! [`PersistedPreference`] wraps a [`PreferenceStore`] with a session memory
//! layer. Reads and writes never surface errors to the caller: if the durable
//! store cannot be opened, or a write to it fails, the preference keeps working
//! for the rest of the session from memory alone and the failure is logged.

use crate::storage::backend::PreferenceStore;
use crate::storage::json::JsonPreferences;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// String preferences backed by durable storage when available.
///
/// # Examples
///
/// ```no_run
/// use hn_search::storage::PersistedPreference;
/// use std::path::PathBuf;
///
/// let mut prefs = PersistedPreference::open(PathBuf::from("/tmp/preferences.json"));
/// prefs.set("search", "Redux");
/// assert_eq!(prefs.get("search", "React"), "Redux");
/// ```
pub struct PersistedPreference {
    memory: HashMap<String, String>,
    store: Option<Box<dyn PreferenceStore>>,
}

impl PersistedPreference {
    /// Opens a JSON preference file at `path`.
    ///
    /// Never fails. If the file cannot be opened the preference runs from
    /// session memory only.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        match JsonPreferences::new(path) {
            Ok(store) => {
                tracing::debug!(path = ?store.path(), "preference storage opened");
                Self::with_store(Box::new(store))
            }
            Err(e) => {
                tracing::warn!(error = %e, "preference storage unavailable, using session memory");
                Self::memory_only()
            }
        }
    }

    /// Wraps an already opened backend.
    #[must_use]
    pub fn with_store(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            memory: HashMap::new(),
            store: Some(store),
        }
    }

    /// A preference that never touches durable storage.
    #[must_use]
    pub fn memory_only() -> Self {
        Self {
            memory: HashMap::new(),
            store: None,
        }
    }

    /// Whether writes still reach durable storage.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the value for `key`, or `default` if it was never set.
    ///
    /// Values written this session win over the durable copy. An explicitly
    /// stored empty string is returned as is and does not fall back to
    /// `default`.
    pub fn get(&self, key: &str, default: &str) -> String {
        if let Some(value) = self.memory.get(key) {
            return value.clone();
        }

        let stored = self.store.as_ref().and_then(|store| match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read preference");
                None
            }
        });

        stored.unwrap_or_else(|| default.to_string())
    }

    /// Stores `value` under `key`.
    ///
    /// The value is kept in memory first, so a later [`get`](Self::get) in
    /// this session always sees it. A failing durable write switches the
    /// preference to memory-only mode.
    pub fn set(&mut self, key: &str, value: &str) {
        self.memory.insert(key.to_string(), value.to_string());

        let Some(store) = self.store.as_mut() else {
            return;
        };

        if let Err(e) = store.set(key, value) {
            tracing::warn!(
                key = %key,
                error = %e,
                "failed to persist preference, continuing with session memory"
            );
            self.store = None;
        }
    }
}

impl fmt::Debug for PersistedPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedPreference")
            .field("memory", &self.memory)
            .field("durable", &self.is_durable())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, SearchError};
    use tempfile::TempDir;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(SearchError::Storage("unreadable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(SearchError::Storage("read-only".into()))
        }
    }

    #[test]
    fn missing_key_returns_default() {
        let dir = TempDir::new().unwrap();
        let prefs = PersistedPreference::open(dir.path().join("preferences.json"));
        assert_eq!(prefs.get("search", "React"), "React");
    }

    #[test]
    fn empty_string_is_a_real_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = PersistedPreference::open(path.clone());
        prefs.set("search", "");
        assert_eq!(prefs.get("search", "React"), "");

        let reopened = PersistedPreference::open(path);
        assert_eq!(reopened.get("search", "React"), "");
    }

    #[test]
    fn value_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = PersistedPreference::open(path.clone());
        prefs.set("search", "Redux");
        drop(prefs);

        let reopened = PersistedPreference::open(path);
        assert!(reopened.is_durable());
        assert_eq!(reopened.get("search", "React"), "Redux");
    }

    #[test]
    fn unopenable_path_falls_back_to_memory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let mut prefs = PersistedPreference::open(blocker.join("preferences.json"));
        assert!(!prefs.is_durable());

        prefs.set("search", "Redux");
        assert_eq!(prefs.get("search", "React"), "Redux");
    }

    #[test]
    fn failing_store_degrades_to_memory() {
        let mut prefs = PersistedPreference::with_store(Box::new(BrokenStore));
        assert_eq!(prefs.get("search", "React"), "React");

        prefs.set("search", "Vue");
        assert!(!prefs.is_durable());
        assert_eq!(prefs.get("search", "React"), "Vue");
    }
}
