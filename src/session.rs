//! A running search session.
//!
//! [`SearchSession`] owns everything with a process lifetime: the application
//! state, the persisted preference and the worker thread. It feeds events
//! through [`handle_event`] and executes the resulting actions, so callers only
//! deal in events and view models.

use crate::app::{handle_event, Action, AppState, Event};
use crate::client::SearchTransport;
use crate::domain::error::Result;
use crate::storage::PersistedPreference;
use crate::worker::{FetchOutcome, SearchWorker, WorkerHandle, WorkerMessage, WorkerResponse};
use crate::Config;

/// Application state wired to its side effects.
#[derive(Debug)]
pub struct SearchSession {
    app: AppState,
    preferences: PersistedPreference,
    preference_key: String,
    worker: WorkerHandle,
}

impl SearchSession {
    /// Starts a session and issues the initial fetch.
    ///
    /// The initial term is the stored preference, or `config.default_term` if
    /// none was ever stored. A stored empty term starts the session without a
    /// fetch.
    ///
    /// Worker responses are handed to `on_response` on the worker thread. The
    /// caller is expected to route them back into [`update`](Self::update)
    /// as `Event::WorkerResponse`, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint in `config` is invalid or the worker
    /// thread cannot be spawned.
    pub fn start<T, F>(
        config: &Config,
        preferences: PersistedPreference,
        transport: T,
        on_response: F,
    ) -> Result<Self>
    where
        T: SearchTransport + 'static,
        F: FnMut(WorkerResponse) + Send + 'static,
    {
        let app = crate::initialize(config, &preferences)?;
        let worker = WorkerHandle::spawn(SearchWorker::new(transport, config.max_retries), on_response)?;

        let mut session = Self {
            app,
            preferences,
            preference_key: config.preference_key.clone(),
            worker,
        };

        if session.app.can_submit() {
            session.update(&Event::SearchSubmitted);
        } else {
            tracing::info!("stored search term is empty, skipping initial fetch");
        }

        Ok(session)
    }

    /// Applies one event and runs its actions.
    ///
    /// Returns whether the view should be re-rendered. Rejected events (an
    /// empty submission) leave the session untouched and return `false`.
    pub fn update(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "event rejected");
                false
            }
        }
    }

    /// Current application state.
    #[must_use]
    pub const fn app(&self) -> &AppState {
        &self.app
    }

    /// Persisted preference store.
    #[must_use]
    pub const fn preferences(&self) -> &PersistedPreference {
        &self.preferences
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread panicked.
    pub fn shutdown(self) -> Result<()> {
        self.worker.shutdown()
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::PersistSearchTerm(term) => {
                self.preferences.set(&self.preference_key, &term);
            }
            Action::PostToWorker(message) => {
                let failed = match &message {
                    WorkerMessage::Fetch { generation, target } => {
                        Some((*generation, target.term().to_string()))
                    }
                    WorkerMessage::Shutdown => None,
                };

                if let Err(e) = self.worker.post(message) {
                    tracing::warn!(error = %e, "failed to post message to worker");

                    // Settle the request locally so the result state leaves Loading.
                    if let Some((generation, term)) = failed {
                        self.update(&Event::WorkerResponse(WorkerResponse::Fetched {
                            generation,
                            term,
                            outcome: FetchOutcome::Failure {
                                reason: e.to_string(),
                            },
                        }));
                    }
                }
            }
        }
    }
}
