//! Actions representing side effects to be executed by the session runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge pure state transitions and effectful operations: writing the
//! search preference to disk and handing fetch requests to the worker.
//!
//! # Example
//!
//! ```rust
//! use hn_search::app::Action;
//!
//! let actions = vec![Action::PersistSearchTerm("Redux".to_string())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the session runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes the live search term to the persisted preference.
    ///
    /// Emitted on every term change, submitted or not.
    PersistSearchTerm(String),

    /// Posts a message to the background fetch worker.
    PostToWorker(WorkerMessage),
}
