//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container. It keeps
//! the core data (live search term, fetch bookkeeping, result state) and
//! derives everything else (filtered rows, submit availability) on demand.
//!
//! # State Components
//!
//! - **Search term**: Live, possibly unsubmitted input; drives the client filter
//! - **Query builder**: Turns a submitted term into a request target
//! - **Fetch orchestrator**: Request generations and the current target
//! - **Results**: Reducer-owned story list with loading and error flags
//!
//! # Example
//!
//! ```rust
//! use hn_search::app::{AppState, QueryBuilder};
//!
//! let builder = QueryBuilder::new("https://hn.algolia.com/api/v1/search")?;
//! let state = AppState::new("React".to_string(), builder);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.search_bar.query, "React");
//! # Ok::<(), hn_search::SearchError>(())
//! ```

use super::fetch::FetchOrchestrator;
use super::filter;
use super::query::QueryBuilder;
use super::results::{ResultState, ResultsMachine};
use crate::domain::Story;
use crate::ui::viewmodel::{EmptyState, ResultsView, SearchBarInfo, StoryRow};

/// Central application state container.
///
/// Mutated by the event handler only. The result list is reachable read-only
/// through [`results`](Self::results); writes go through the reducer.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live search term.
    ///
    /// Replaced on every input change and mirrored to the persisted
    /// preference. Filters the stored results without triggering a fetch.
    pub search_term: String,

    /// Request target builder for submissions.
    pub(crate) builder: QueryBuilder,

    /// Request generation tracking.
    pub(crate) fetch: FetchOrchestrator,

    /// Owner of the result state.
    pub(crate) results: ResultsMachine,
}

impl AppState {
    /// Creates application state with an initial search term.
    ///
    /// The result list starts idle and empty; nothing is fetched until the
    /// first submission.
    #[must_use]
    pub fn new(search_term: String, builder: QueryBuilder) -> Self {
        Self {
            search_term,
            builder,
            fetch: FetchOrchestrator::new(),
            results: ResultsMachine::new(),
        }
    }

    /// Current result state snapshot.
    #[must_use]
    pub const fn results(&self) -> &ResultState {
        self.results.state()
    }

    /// Fetch bookkeeping, read-only.
    #[must_use]
    pub const fn fetch(&self) -> &FetchOrchestrator {
        &self.fetch
    }

    /// Stored stories matching the live search term.
    #[must_use]
    pub fn visible_stories(&self) -> Vec<&Story> {
        filter::visible(self.results().items(), &self.search_term)
    }

    /// Whether the live term may be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Computes a renderable view model from current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ResultsView {
        let results = self.results();
        let rows: Vec<StoryRow> = self
            .visible_stories()
            .into_iter()
            .map(Self::compute_row)
            .collect();

        let empty_state = if rows.is_empty() && !results.is_loading() && !results.is_error() {
            Some(self.compute_empty_state())
        } else {
            None
        };

        ResultsView {
            search_bar: SearchBarInfo {
                query: self.search_term.clone(),
                submit_enabled: self.can_submit(),
            },
            is_loading: results.is_loading(),
            is_error: results.is_error(),
            rows,
            total_items: results.items().len(),
            empty_state,
        }
    }

    fn compute_row(story: &Story) -> StoryRow {
        StoryRow {
            id: story.id.clone(),
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            comment_count: story.comment_count,
            points: story.points,
            age: story.time_ago(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.results().items().is_empty() {
            EmptyState {
                message: "No stories".to_string(),
                subtitle: "Submit a search term to fetch stories".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No stories match \"{}\"", self.search_term),
                subtitle: "Submit the term to search the index".to_string(),
            }
        }
    }
}
