//! JSON file-based preference backend.
//!
//! This module provides a small, human-readable store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so a
//! crash mid-write never leaves a truncated file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the file is loaded into memory once
//! - **Write**: O(n) - the whole map is serialized on every `set`
//! - **Best for**: a handful of keys written on every keystroke

use crate::domain::error::{Result, SearchError};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format.
    version: u32,

    /// Stored preferences by key.
    #[serde(default)]
    entries: BTreeMap<String, PreferenceRecord>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file preference backend.
///
/// Keeps the full map in memory and rewrites the file on every `set`.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "search": { "value": "React", "updated_at": 1700000000 }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonPreferences {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file.
    data: PreferenceData,
}

impl JsonPreferences {
    /// Creates or opens a JSON preference file.
    ///
    /// If the file exists its entries are loaded, otherwise the store starts
    /// empty and the file is created on the first `set`. Parent directories
    /// are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference file");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            PreferenceData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "preferences loaded");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| SearchError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            tracing::warn!(
                version = data.version,
                expected = FORMAT_VERSION,
                "unexpected preference file version, reading anyway"
            );
        }

        Ok(data)
    }

    /// Writes the in-memory map to disk atomically.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SearchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).map(|record| record.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::trace_span!("json_set_preference", key = %key).entered();

        let previous = self
            .data
            .entries
            .insert(key.to_string(), PreferenceRecord::new(value));

        if let Err(e) = self.save_to_file() {
            match previous {
                Some(record) => self.data.entries.insert(key.to_string(), record),
                None => self.data.entries.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }
}
