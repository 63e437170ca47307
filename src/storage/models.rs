//! Storage record models for the preference file.
//!
//! These types describe the on-disk representation and are separate from the
//! plain strings handed to callers.

use serde::{Deserialize, Serialize};

/// A single stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Stored string, possibly empty.
    pub value: String,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use hn_search::storage::PreferenceRecord;
    ///
    /// let record = PreferenceRecord::new("React");
    /// assert_eq!(record.value, "React");
    /// assert!(record.updated_at > 0);
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
