//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes front-end input
//! and worker responses, translating them into state transitions and action
//! sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the front-end or the worker thread, one at a time
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State changes happen through `AppState` and the result reducer
//! 4. Actions are collected and returned for execution
//!
//! Events are applied strictly in arrival order and never concurrently.
//!
//! # Event Types
//!
//! - **Input**: `SearchTermChanged`, `SearchSubmitted`, `ItemDismissed`
//! - **Worker**: `WorkerResponse` carrying a tagged fetch outcome
//!
//! # Example
//!
//! ```rust
//! use hn_search::app::{handle_event, AppState, Event, QueryBuilder};
//!
//! let builder = QueryBuilder::new("https://hn.algolia.com/api/v1/search")?;
//! let mut state = AppState::new(String::new(), builder);
//! let (_, actions) = handle_event(&mut state, &Event::SearchTermChanged("Redux".into()))?;
//! assert_eq!(state.search_term, "Redux");
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), hn_search::SearchError>(())
//! ```

use crate::app::results::ResultAction;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::WorkerResponse;

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The live search term changed to this text.
    ///
    /// Persists the term and re-filters stored results. Never fetches.
    SearchTermChanged(String),

    /// The user submitted the live search term.
    ///
    /// Builds a new request target and issues exactly one fetch for it.
    SearchSubmitted,

    /// The user dismissed the story with this id.
    ItemDismissed(String),

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A tuple of whether the front-end should re-render, and the actions to
/// execute in order.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`](crate::SearchError::EmptyQuery) when
/// `SearchSubmitted` arrives while the live term is empty. State is left
/// unchanged and nothing is fetched.
///
/// # Panics
///
/// Panics if a worker response would drive the result state through an
/// invalid transition, which means the fetch bookkeeping is broken.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchTermChanged(text) => {
            if &state.search_term == text {
                return Ok((false, vec![]));
            }

            state.search_term.clone_from(text);
            tracing::trace!(term = %state.search_term, "search term updated");

            Ok((true, vec![Action::PersistSearchTerm(text.clone())]))
        }
        Event::SearchSubmitted => {
            let target = state.builder.build(&state.search_term).map_err(|e| {
                tracing::debug!(error = %e, "submission rejected");
                e
            })?;

            let (init, message) = state.fetch.issue(target);
            state.results.dispatch(init);

            Ok((true, vec![Action::PostToWorker(message)]))
        }
        Event::ItemDismissed(id) => {
            tracing::debug!(story_id = %id, "dismissing story");
            state.results.dispatch(ResultAction::Remove(id.clone()));
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match state.fetch.settle(response) {
            Some(action) => {
                state.results.dispatch(action);
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::query::{QueryBuilder, DEFAULT_ENDPOINT};
    use crate::app::results::ResultPhase;
    use crate::domain::{SearchError, Story};
    use crate::worker::{FetchOutcome, WorkerMessage};

    fn state(term: &str) -> AppState {
        AppState::new(term.to_string(), QueryBuilder::new(DEFAULT_ENDPOINT).unwrap())
    }

    fn story(id: &str, title: &str) -> Story {
        Story::new(id, "", title, "a", 1, 1)
    }

    fn fetched(generation: u64, outcome: FetchOutcome) -> Event {
        Event::WorkerResponse(WorkerResponse::Fetched {
            generation,
            term: String::new(),
            outcome,
        })
    }

    fn submit(state: &mut AppState) -> u64 {
        let (_, actions) = handle_event(state, &Event::SearchSubmitted).unwrap();
        match actions.as_slice() {
            [Action::PostToWorker(WorkerMessage::Fetch { generation, .. })] => *generation,
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn term_change_persists_without_fetching() {
        let mut state = state("React");
        let (render, actions) =
            handle_event(&mut state, &Event::SearchTermChanged("Redux".into())).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::PersistSearchTerm("Redux".into())]);
        assert_eq!(state.fetch().generation(), 0);
        assert_eq!(state.results().phase(), ResultPhase::Idle);
    }

    #[test]
    fn unchanged_term_is_ignored() {
        let mut state = state("React");
        let (render, actions) =
            handle_event(&mut state, &Event::SearchTermChanged("React".into())).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_sets_loading_and_posts_fetch() {
        let mut state = state("React");
        let (render, actions) = handle_event(&mut state, &Event::SearchSubmitted).unwrap();

        assert!(render);
        assert!(state.results().is_loading());
        let expected = state.builder.build("React").unwrap();
        assert_eq!(actions, vec![Action::PostToWorker(WorkerMessage::fetch(1, expected))]);
    }

    #[test]
    fn empty_submit_is_rejected_without_state_change() {
        let mut state = state("");
        let result = handle_event(&mut state, &Event::SearchSubmitted);

        assert!(matches!(result, Err(SearchError::EmptyQuery)));
        assert_eq!(state.results().phase(), ResultPhase::Idle);
        assert_eq!(state.fetch().generation(), 0);
    }

    #[test]
    fn success_replaces_items() {
        let mut state = state("React");
        let generation = submit(&mut state);
        let stories = vec![story("a", "React A"), story("b", "React B")];

        let (render, _) =
            handle_event(&mut state, &fetched(generation, FetchOutcome::Success(stories.clone())))
                .unwrap();

        assert!(render);
        assert_eq!(state.results().items(), stories.as_slice());
        assert!(!state.results().is_loading());
        assert!(!state.results().is_error());
    }

    #[test]
    fn failure_keeps_items_and_sets_error() {
        let mut state = state("React");
        let first = submit(&mut state);
        let stories = vec![story("a", "React A")];
        handle_event(&mut state, &fetched(first, FetchOutcome::Success(stories.clone()))).unwrap();

        let second = submit(&mut state);
        handle_event(
            &mut state,
            &fetched(second, FetchOutcome::Failure { reason: "offline".into() }),
        )
        .unwrap();

        assert!(state.results().is_error());
        assert!(!state.results().is_loading());
        assert_eq!(state.results().items(), stories.as_slice());
    }

    #[test]
    fn stale_result_does_not_touch_state() {
        let mut state = state("React");
        let stale = submit(&mut state);
        handle_event(&mut state, &Event::SearchTermChanged("Redux".into())).unwrap();
        let current = submit(&mut state);

        let (render, _) = handle_event(
            &mut state,
            &fetched(stale, FetchOutcome::Success(vec![story("old", "React old")])),
        )
        .unwrap();
        assert!(!render);
        assert!(state.results().is_loading());
        assert!(state.results().items().is_empty());

        let fresh = vec![story("new", "Redux new")];
        handle_event(&mut state, &fetched(current, FetchOutcome::Success(fresh.clone()))).unwrap();
        assert_eq!(state.results().items(), fresh.as_slice());

        let (render, _) =
            handle_event(&mut state, &fetched(stale, FetchOutcome::Failure { reason: "late".into() }))
                .unwrap();
        assert!(!render);
        assert!(!state.results().is_error());
    }

    #[test]
    fn dismiss_removes_story_and_keeps_flags() {
        let mut state = state("React");
        let generation = submit(&mut state);
        handle_event(
            &mut state,
            &fetched(
                generation,
                FetchOutcome::Success(vec![story("abc123", "React A"), story("def", "React B")]),
            ),
        )
        .unwrap();

        handle_event(&mut state, &Event::ItemDismissed("abc123".into())).unwrap();

        let ids: Vec<&str> = state.results().items().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["def"]);
        assert!(!state.results().is_loading());
        assert!(!state.results().is_error());
    }
}
