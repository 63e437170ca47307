//! Result state reducer.
//!
//! [`ResultState`] is the authoritative snapshot of the result list: the
//! stored stories plus the fetch phase. It changes only through
//! [`ResultState::reduce`], a pure transition over the closed
//! [`ResultAction`] set:
//!
//! | Current | Action | Next | items |
//! |---|---|---|---|
//! | any | `Init` | `Loading` | unchanged |
//! | `Loading` | `Success(payload)` | `Loaded` | payload |
//! | `Loading` | `Failure` | `Failed` | unchanged |
//! | any | `Remove(id)` | unchanged | items minus id |
//!
//! `Success` or `Failure` outside `Loading` means the caller broke the fetch
//! protocol. The pure reducer reports it as a [`TransitionError`];
//! [`ResultsMachine::dispatch`] turns that into a panic.

use crate::domain::Story;
use thiserror::Error;

/// Fetch phase of the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request succeeded.
    Loaded,
    /// The last request failed; items are those from before it.
    Failed,
}

/// Transition events accepted by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// A fetch is about to be issued.
    Init,
    /// The current fetch returned these stories.
    Success(Vec<Story>),
    /// The current fetch failed.
    Failure,
    /// The user dismissed the story with this id.
    Remove(String),
}

impl ResultAction {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init => "INIT",
            Self::Success(_) => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Remove(_) => "REMOVE",
        }
    }
}

/// An action that is not valid for the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{action} is not accepted in phase {phase:?}")]
pub struct TransitionError {
    pub action: &'static str,
    pub phase: ResultPhase,
}

/// Snapshot of the result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultState {
    items: Vec<Story>,
    phase: ResultPhase,
}

impl ResultState {
    /// Stored stories in endpoint order, minus dismissed ones.
    #[must_use]
    pub fn items(&self) -> &[Story] {
        &self.items
    }

    #[must_use]
    pub const fn phase(&self) -> ResultPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == ResultPhase::Loading
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.phase == ResultPhase::Failed
    }

    /// Applies one transition and returns the next state.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] when `Success` or `Failure` arrives while
    /// no request is outstanding.
    pub fn reduce(self, action: ResultAction) -> Result<Self, TransitionError> {
        match (self.phase, action) {
            (_, ResultAction::Init) => Ok(Self {
                items: self.items,
                phase: ResultPhase::Loading,
            }),
            (ResultPhase::Loading, ResultAction::Success(items)) => Ok(Self {
                items,
                phase: ResultPhase::Loaded,
            }),
            (ResultPhase::Loading, ResultAction::Failure) => Ok(Self {
                items: self.items,
                phase: ResultPhase::Failed,
            }),
            (phase, ResultAction::Remove(id)) => {
                let mut items = self.items;
                items.retain(|story| story.id != id);
                Ok(Self { items, phase })
            }
            (phase, action @ (ResultAction::Success(_) | ResultAction::Failure)) => {
                Err(TransitionError {
                    action: action.name(),
                    phase,
                })
            }
        }
    }
}

/// Owner of the [`ResultState`].
///
/// Nothing else holds a mutable handle on the state, so every change goes
/// through [`dispatch`](Self::dispatch).
#[derive(Debug, Clone, Default)]
pub struct ResultsMachine {
    state: ResultState,
}

impl ResultsMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &ResultState {
        &self.state
    }

    /// Applies `action` to the owned state.
    ///
    /// # Panics
    ///
    /// Panics if the action is not valid in the current phase. That only
    /// happens when the fetch orchestration is broken.
    pub fn dispatch(&mut self, action: ResultAction) {
        let _span = tracing::debug_span!("results_dispatch",
            action = action.name(),
            phase = ?self.state.phase
        ).entered();

        let current = std::mem::take(&mut self.state);
        match current.reduce(action) {
            Ok(next) => {
                tracing::debug!(
                    phase = ?next.phase,
                    item_count = next.items.len(),
                    "result state updated"
                );
                self.state = next;
            }
            Err(e) => {
                tracing::error!(error = %e, "result state protocol violation");
                panic!("result state protocol violation: {e}");
            }
        }
    }
}
