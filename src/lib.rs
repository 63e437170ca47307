//! hn-search: a terminal client for the Hacker News search index.
//!
//! The client keeps one live search term, fetches stories for it on demand
//! and narrows the fetched list locally while the user types:
//! - Explicit submission; typing never triggers a request
//! - Client-side title filtering of the stored results
//! - Stale responses from superseded requests are discarded
//! - The last search term persists across runs

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line front-end (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session (session.rs)                               │  ← Action execution
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Result reducer and fetch generations             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View model  │   │ - JSON I/O    │   │ - Fetch thread│
//! │ - Rendering   │   │ - Fail-open   │   │ - Retries     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//!                                          ┌───────────────┐
//!                                          │ Client (http) │
//!                                          └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Story model (domain/story)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing to a rotating log file                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`client`]: Search endpoint transport
//! - [`domain`]: Core domain types (Story, errors)
//! - [`infrastructure`]: Data directory resolution
//! - [`session`]: Running session wiring state, preference and worker
//! - [`storage`]: Persisted search preference
//! - [`worker`]: Background fetch thread
//! - [`ui`]: View models and line rendering
//! - [`observability`]: File-based tracing setup
//!
//! # Configuration
//!
//! Configuration is read from `config.toml` in the data directory
//! (`$HN_SEARCH_HOME`, or `~/.hn_search`). Every key is optional:
//!
//! ```toml
//! endpoint = "https://hn.algolia.com/api/v1/search"
//! default_term = "React"
//! preference_key = "search"
//! request_timeout_secs = 10
//! max_retries = 1
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Resolve the data directory and load configuration
//!    - Initialize tracing
//!    - Open the preference file (falls back to memory on failure)
//!
//! 2. **Session start**:
//!    - Read the stored term, or the configured default
//!    - Spawn the worker thread
//!    - Submit the initial term
//!
//! 3. **Event loop**:
//!    - Input lines and worker responses arrive on one channel
//!    - Each event goes through `handle_event`, one at a time
//!    - The view model is recomputed and rendered after each change
//!
//! # Examples
//!
//! ```rust
//! use hn_search::storage::PersistedPreference;
//! use hn_search::{handle_event, initialize, Config, Event};
//!
//! let preferences = PersistedPreference::memory_only();
//! let mut state = initialize(&Config::default(), &preferences)?;
//! assert_eq!(state.search_term, "React");
//!
//! let (_, actions) = handle_event(&mut state, &Event::SearchSubmitted)?;
//! assert_eq!(actions.len(), 1);
//! assert!(state.results().is_loading());
//! # Ok::<(), hn_search::SearchError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, QueryBuilder, QueryTarget};
pub use domain::{Result, SearchError, Story};
pub use session::SearchSession;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Client configuration loaded from `config.toml`.
///
/// Missing keys take their defaults, so an empty file is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Search endpoint the `query` parameter is appended to.
    pub endpoint: String,

    /// Term used when no preference has ever been stored. Default: `"React"`
    pub default_term: String,

    /// Key the live search term is stored under. Default: `"search"`
    pub preference_key: String,

    /// Per-request timeout in seconds.
    ///
    /// Unset means requests never time out on the client side.
    pub request_timeout_secs: Option<u64>,

    /// Additional attempts after a failed request. Default: `0`
    pub max_retries: u32,

    /// Tracing level used when `RUST_LOG` is not set.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: app::query::DEFAULT_ENDPOINT.to_string(),
            default_term: "React".to_string(),
            preference_key: "search".to_string(),
            request_timeout_secs: None,
            max_retries: 0,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] on malformed TOML, unknown keys or
    /// values of the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hn_search::Config;
    ///
    /// let config = Config::from_toml_str("default_term = \"Rust\"\nmax_retries = 2\n")?;
    /// assert_eq!(config.default_term, "Rust");
    /// assert_eq!(config.max_retries, 2);
    /// assert_eq!(config.preference_key, "search");
    /// # Ok::<(), hn_search::SearchError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SearchError::Config(format!("failed to parse config: {e}")))
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Builds the initial application state.
///
/// The live search term is the stored preference, or `config.default_term`
/// when nothing has been stored. Results start idle and empty.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config.endpoint` is not a valid URL.
pub fn initialize(config: &Config, preferences: &storage::PersistedPreference) -> Result<AppState> {
    tracing::debug!("initializing search client");

    let builder = QueryBuilder::new(&config.endpoint)?;
    let term = preferences.get(&config.preference_key, &config.default_term);

    tracing::debug!(term = %term, endpoint = %builder.endpoint(), "initial search term");

    Ok(AppState::new(term, builder))
}
