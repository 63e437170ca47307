//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the front-end (main.rs) and the storage/worker
//! layers. It owns every piece of state with transition logic: the live search
//! term, the fetch lifecycle and the result list.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Transitions → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`fetch`]: Request generations and stale-result rejection
//! - [`filter`]: Case-insensitive title filter over stored results
//! - [`handler`]: Event processing and state transition coordinator
//! - [`query`]: Request target derivation from a submitted term
//! - [`results`]: Result state reducer
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use hn_search::app::{handle_event, AppState, Event, QueryBuilder};
//!
//! let builder = QueryBuilder::new("https://hn.algolia.com/api/v1/search")?;
//! let mut state = AppState::new("React".to_string(), builder);
//! let (should_render, actions) = handle_event(&mut state, &Event::SearchSubmitted)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), hn_search::SearchError>(())
//! ```

pub mod actions;
pub mod fetch;
pub mod filter;
pub mod handler;
pub mod query;
pub mod results;
pub mod state;

pub use actions::Action;
pub use fetch::FetchOrchestrator;
pub use handler::{handle_event, Event};
pub use query::{QueryBuilder, QueryTarget};
pub use results::{ResultAction, ResultPhase, ResultState, ResultsMachine, TransitionError};
pub use state::AppState;
