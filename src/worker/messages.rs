//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! event loop and the background fetch worker. Every fetch request carries the
//! generation number the orchestrator assigned to it, and the response echoes
//! that number back so stale outcomes can be recognized on arrival.

use crate::app::query::QueryTarget;
use crate::domain::Story;

/// Result of one fetch as seen by the main thread.
///
/// Transport and decode errors are flattened into `Failure`; the reason is
/// kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint returned a well-formed story list.
    Success(Vec<Story>),

    /// The request failed for any reason.
    Failure {
        /// Human-readable cause.
        reason: String,
    },
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Run a search request.
    Fetch {
        /// Orchestrator generation this request belongs to.
        generation: u64,

        /// Request target to fetch.
        target: QueryTarget,
    },

    /// Stop the worker loop.
    ///
    /// A request already running finishes first. Fetches still queued behind
    /// it are dropped without being sent once the handle has asked to stop.
    Shutdown,
}

impl WorkerMessage {
    /// Creates a `Fetch` message.
    #[must_use]
    pub const fn fetch(generation: u64, target: QueryTarget) -> Self {
        Self::Fetch { generation, target }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A fetch finished, successfully or not.
    Fetched {
        /// Generation copied from the originating request.
        generation: u64,

        /// Term of the originating request, for logging.
        term: String,

        /// What the request produced.
        outcome: FetchOutcome,
    },
}
