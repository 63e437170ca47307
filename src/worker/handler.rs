//! Fetch execution on the worker thread.
//!
//! [`SearchWorker`] owns a [`SearchTransport`] and turns fetch requests into
//! tagged responses. It never raises: every transport or decode error becomes
//! a [`FetchOutcome::Failure`] carrying the error text.

use crate::app::QueryTarget;
use crate::client::SearchTransport;
use crate::worker::{FetchOutcome, WorkerMessage, WorkerResponse};

/// Worker-side request processor.
#[derive(Debug)]
pub struct SearchWorker<T> {
    transport: T,
    max_retries: u32,
}

impl<T: SearchTransport> SearchWorker<T> {
    /// Creates a worker that retries a failed request up to `max_retries`
    /// additional times before reporting failure.
    pub const fn new(transport: T, max_retries: u32) -> Self {
        Self {
            transport,
            max_retries,
        }
    }

    /// Runs the request for `target` and reports its outcome.
    pub fn fetch(&self, target: &QueryTarget) -> FetchOutcome {
        let mut attempt = 0;
        loop {
            match self.transport.search(target) {
                Ok(stories) => return FetchOutcome::Success(stories),
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    tracing::debug!(attempt = attempt, error = %e, "search request failed, retrying");
                }
                Err(e) => {
                    return FetchOutcome::Failure {
                        reason: e.to_string(),
                    }
                }
            }
        }
    }

    /// Processes a worker message and returns the response to post back.
    ///
    /// `Shutdown` has no response.
    pub fn handle_message(&self, message: WorkerMessage) -> Option<WorkerResponse> {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::Fetch { generation, target } => {
                let outcome = self.fetch(&target);
                Some(WorkerResponse::Fetched {
                    generation,
                    term: target.term().to_string(),
                    outcome,
                })
            }
            WorkerMessage::Shutdown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::query::{QueryBuilder, DEFAULT_ENDPOINT};
    use crate::domain::error::{Result, SearchError};
    use crate::domain::Story;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails `failures` times, then returns one story.
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    impl Flaky {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }
    }

    impl SearchTransport for Flaky {
        fn search(&self, target: &QueryTarget) -> Result<Vec<Story>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(SearchError::Status(503))
            } else {
                Ok(vec![Story::new("1", "", target.term(), "a", 0, 0)])
            }
        }
    }

    fn target(term: &str) -> QueryTarget {
        QueryBuilder::new(DEFAULT_ENDPOINT).unwrap().build(term).unwrap()
    }

    #[test]
    fn success_echoes_generation_and_term() {
        let worker = SearchWorker::new(Flaky::new(0), 0);
        let response = worker
            .handle_message(WorkerMessage::fetch(7, target("React")))
            .unwrap();

        let WorkerResponse::Fetched {
            generation,
            term,
            outcome,
        } = response;
        assert_eq!(generation, 7);
        assert_eq!(term, "React");
        assert_eq!(
            outcome,
            FetchOutcome::Success(vec![Story::new("1", "", "React", "a", 0, 0)])
        );
    }

    #[test]
    fn errors_become_failures_without_retries() {
        let worker = SearchWorker::new(Flaky::new(1), 0);
        assert_eq!(
            worker.fetch(&target("React")),
            FetchOutcome::Failure {
                reason: "search endpoint returned status 503".into()
            }
        );
        assert_eq!(worker.transport.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn retries_until_success() {
        let worker = SearchWorker::new(Flaky::new(2), 2);
        assert!(matches!(worker.fetch(&target("React")), FetchOutcome::Success(_)));
        assert_eq!(worker.transport.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn shutdown_has_no_response() {
        let worker = SearchWorker::new(Flaky::new(0), 0);
        assert!(worker.handle_message(WorkerMessage::Shutdown).is_none());
    }
}
