//! Storage layer for persisted user preferences.
//!
//! The only thing the client persists across runs is the last search term.
//! It is written on every input change so the next session starts where this
//! one left off.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Storage record types
//! - `preference`: Fail-open wrapper used by the application

pub mod backend;
pub mod json;
pub mod models;
pub mod preference;

pub use backend::PreferenceStore;
pub use json::JsonPreferences;
pub use models::PreferenceRecord;
pub use preference::PersistedPreference;
