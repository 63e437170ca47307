//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They are the
//! whole contract with the front-end: the live search term, the loading and
//! error flags, and the rows that survive the client filter.
//!
//! # Example
//!
//! ```rust
//! use hn_search::ui::viewmodel::{ResultsView, SearchBarInfo};
//!
//! let vm = ResultsView {
//!     search_bar: SearchBarInfo { query: "React".into(), submit_enabled: true },
//!     is_loading: true,
//!     is_error: false,
//!     rows: vec![],
//!     total_items: 0,
//!     empty_state: None,
//! };
//! assert!(vm.rows.is_empty());
//! ```

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// Search input state.
    pub search_bar: SearchBarInfo,

    /// A request is outstanding.
    pub is_loading: bool,

    /// The last request failed.
    pub is_error: bool,

    /// Stored stories matching the live term, in stored order.
    pub rows: Vec<StoryRow>,

    /// Number of stored stories before filtering.
    pub total_items: usize,

    /// Message shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Live search term.
    pub query: String,

    /// Whether submitting is currently allowed (term non-empty).
    pub submit_enabled: bool,
}

/// One row of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRow {
    /// Story id, used to dismiss the row.
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comment_count: u32,
    pub points: i32,
    /// Relative submission time, e.g. "3h ago".
    pub age: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No stories match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
