//! Fetch lifecycle bookkeeping.
//!
//! The [`FetchOrchestrator`] decides which fetch outcomes are allowed to reach
//! the result state. Each issued request gets the next value of a monotonically
//! increasing generation counter. Only the latest generation may settle, and it
//! settles at most once; anything else is a stale result and is dropped.
//!
//! In-flight requests are never cancelled. Superseded ones run to completion
//! on the worker and their outcome is discarded here.
//!
//! ```text
//! submit ──► issue(target) ──► (Init, Fetch{gen}) ──► worker
//!                                                     │
//! result state ◄── settle(Fetched{gen}) ◄─────────────┘
//!                  (None if gen is stale)
//! ```

use super::query::QueryTarget;
use super::results::ResultAction;
use crate::worker::{FetchOutcome, WorkerMessage, WorkerResponse};

/// Tracks the current request generation and its target.
#[derive(Debug, Clone, Default)]
pub struct FetchOrchestrator {
    generation: u64,
    current: Option<QueryTarget>,
    in_flight: bool,
}

impl FetchOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recently issued request, `0` before the first.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Target of the most recently issued request.
    #[must_use]
    pub const fn current_target(&self) -> Option<&QueryTarget> {
        self.current.as_ref()
    }

    /// Whether the latest request is still outstanding.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Starts a new request generation for `target`.
    ///
    /// Returns the `Init` transition to apply before the request goes out,
    /// followed by the worker message that performs it. Any request issued
    /// earlier becomes stale.
    pub fn issue(&mut self, target: QueryTarget) -> (ResultAction, WorkerMessage) {
        self.generation += 1;
        if self.in_flight {
            tracing::debug!(
                superseded_generation = self.generation - 1,
                "superseding outstanding request"
            );
        }
        self.in_flight = true;
        self.current = Some(target.clone());

        tracing::debug!(
            generation = self.generation,
            term = %target.term(),
            "fetch issued"
        );

        (ResultAction::Init, WorkerMessage::fetch(self.generation, target))
    }

    /// Maps a worker response to the transition it should cause, if any.
    ///
    /// Returns `None` for responses belonging to a superseded generation, or
    /// for a second response to a generation that already settled.
    pub fn settle(&mut self, response: &WorkerResponse) -> Option<ResultAction> {
        let WorkerResponse::Fetched {
            generation,
            term,
            outcome,
        } = response;

        if *generation != self.generation || !self.in_flight {
            tracing::debug!(
                generation = generation,
                current_generation = self.generation,
                term = %term,
                "discarding stale fetch result"
            );
            return None;
        }

        self.in_flight = false;

        match outcome {
            FetchOutcome::Success(stories) => {
                tracing::debug!(generation = generation, story_count = stories.len(), "fetch succeeded");
                Some(ResultAction::Success(stories.clone()))
            }
            FetchOutcome::Failure { reason } => {
                tracing::warn!(generation = generation, term = %term, reason = %reason, "fetch failed");
                Some(ResultAction::Failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::query::{QueryBuilder, DEFAULT_ENDPOINT};
    use crate::domain::Story;

    fn target(term: &str) -> QueryTarget {
        QueryBuilder::new(DEFAULT_ENDPOINT).unwrap().build(term).unwrap()
    }

    fn fetched(generation: u64, outcome: FetchOutcome) -> WorkerResponse {
        WorkerResponse::Fetched {
            generation,
            term: "t".into(),
            outcome,
        }
    }

    #[test]
    fn issue_emits_init_then_tagged_fetch() {
        let mut orchestrator = FetchOrchestrator::new();
        let (action, message) = orchestrator.issue(target("React"));

        assert_eq!(action, ResultAction::Init);
        assert_eq!(message, WorkerMessage::fetch(1, target("React")));
        assert_eq!(orchestrator.current_target(), Some(&target("React")));
        assert!(orchestrator.is_in_flight());
    }

    #[test]
    fn current_generation_settles_once() {
        let mut orchestrator = FetchOrchestrator::new();
        orchestrator.issue(target("React"));

        let stories = vec![Story::new("1", "", "React", "a", 0, 0)];
        let response = fetched(1, FetchOutcome::Success(stories.clone()));

        assert_eq!(orchestrator.settle(&response), Some(ResultAction::Success(stories)));
        assert!(!orchestrator.is_in_flight());
        assert_eq!(orchestrator.settle(&response), None);
    }

    #[test]
    fn superseded_generation_is_discarded() {
        let mut orchestrator = FetchOrchestrator::new();
        orchestrator.issue(target("React"));
        orchestrator.issue(target("Redux"));

        let stale = fetched(1, FetchOutcome::Success(vec![]));
        assert_eq!(orchestrator.settle(&stale), None);
        assert!(orchestrator.is_in_flight());

        let current = fetched(2, FetchOutcome::Failure { reason: "boom".into() });
        assert_eq!(orchestrator.settle(&current), Some(ResultAction::Failure));
    }

    #[test]
    fn resubmitting_same_target_starts_new_generation() {
        let mut orchestrator = FetchOrchestrator::new();
        orchestrator.issue(target("React"));
        let (_, message) = orchestrator.issue(target("React"));
        assert_eq!(message, WorkerMessage::fetch(2, target("React")));
        assert_eq!(orchestrator.settle(&fetched(1, FetchOutcome::Success(vec![]))), None);
    }
}
