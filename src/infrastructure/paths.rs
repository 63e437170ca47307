//! Filesystem locations used by the client.
//!
//! Everything the client writes lives in one data directory: the config file,
//! the preference file and the log file.

use crate::domain::error::{Result, SearchError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HN_SEARCH_HOME";

/// Directory name under the home directory when no override is set.
const DEFAULT_DIR_NAME: &str = ".hn_search";

/// Returns the data directory.
///
/// Uses `$HN_SEARCH_HOME` when set and non-empty, otherwise `~/.hn_search`.
/// The directory is not created here.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if no override is set and the home
/// directory cannot be determined.
pub fn get_data_dir() -> Result<PathBuf> {
    resolve_data_dir(std::env::var_os(DATA_DIR_ENV), dirs_next::home_dir())
}

fn resolve_data_dir(override_dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    home.map(|home| home.join(DEFAULT_DIR_NAME)).ok_or_else(|| {
        SearchError::Config(format!(
            "cannot determine home directory, set {DATA_DIR_ENV}"
        ))
    })
}

/// Location of `config.toml` inside `data_dir`.
#[must_use]
pub fn config_file(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Location of the preference file inside `data_dir`.
#[must_use]
pub fn preference_file(data_dir: &Path) -> PathBuf {
    data_dir.join("preferences.json")
}
