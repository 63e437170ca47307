//! Preference storage backend abstraction.
//!
//! This module defines the [`PreferenceStore`] trait: a durable string
//! key/value store. The trait is deliberately minimal; it maps one to one onto
//! what [`PersistedPreference`](crate::storage::PersistedPreference) needs.

use crate::domain::error::Result;

/// Abstraction over durable key/value preference backends.
///
/// # Implementations
///
/// - [`JsonPreferences`](crate::storage::JsonPreferences): JSON file with atomic writes (default)
///
/// # Examples
///
/// ```no_run
/// use hn_search::storage::{JsonPreferences, PreferenceStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonPreferences::new(PathBuf::from("/tmp/preferences.json"))?;
/// store.set("search", "React")?;
/// assert_eq!(store.get("search")?.as_deref(), Some("React"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the stored value for `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` and makes it durable before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
