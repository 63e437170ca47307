//! Background worker thread for search requests.
//!
//! Requests run on a dedicated thread so the event loop keeps applying input
//! while a search is in flight. Messages go in over a channel; responses come
//! back through a callback, which the binary forwards into its own event
//! channel.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types tagged with a generation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::SearchWorker;
pub use messages::{FetchOutcome, WorkerMessage, WorkerResponse};

use crate::client::SearchTransport;
use crate::domain::error::{Result, SearchError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle to a running worker thread.
///
/// Dropping the handle asks the worker to stop. A request that is already
/// running is allowed to finish in the background; queued requests are
/// dropped.
#[derive(Debug)]
pub struct WorkerHandle {
    sender: Sender<WorkerMessage>,
    stopping: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Spawns the worker thread.
    ///
    /// Every response is passed to `on_response` on the worker thread, in the
    /// order requests were processed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Worker`] if the thread cannot be spawned.
    pub fn spawn<T, F>(worker: SearchWorker<T>, mut on_response: F) -> Result<Self>
    where
        T: SearchTransport + 'static,
        F: FnMut(WorkerResponse) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<WorkerMessage>();
        let stopping = Arc::new(AtomicBool::new(false));
        let worker_stopping = Arc::clone(&stopping);

        let thread = thread::Builder::new()
            .name("search-worker".to_string())
            .spawn(move || {
                tracing::debug!("search worker started");
                run_loop(&worker, &receiver, &worker_stopping, &mut on_response);
                tracing::debug!("search worker stopped");
            })
            .map_err(|e| SearchError::Worker(format!("failed to spawn worker: {e}")))?;

        Ok(Self {
            sender,
            stopping,
            thread: Some(thread),
        })
    }

    /// Queues a message for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Worker`] if the worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|_| SearchError::Worker("worker channel closed".to_string()))
    }

    /// Stops the worker and waits for the thread to exit.
    ///
    /// Queued requests are skipped, but a request already running is waited
    /// for. Without a request timeout that wait is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Worker`] if the worker thread panicked.
    pub fn shutdown(mut self) -> Result<()> {
        self.request_stop();
        match self.thread.take() {
            Some(thread) => thread
                .join()
                .map_err(|_| SearchError::Worker("worker thread panicked".to_string())),
            None => Ok(()),
        }
    }
}

impl WorkerHandle {
    fn request_stop(&self) {
        self.stopping.store(true, Ordering::Release);
        let _ = self.sender.send(WorkerMessage::Shutdown);
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.request_stop();
        }
    }
}

/// Processes messages until `Shutdown`, a closed channel, or a stop request.
///
/// The stop flag is checked before each message, so fetches queued behind a
/// running one never start once the handle has asked to stop.
fn run_loop<T, F>(
    worker: &SearchWorker<T>,
    receiver: &Receiver<WorkerMessage>,
    stopping: &AtomicBool,
    on_response: &mut F,
) where
    T: SearchTransport,
    F: FnMut(WorkerResponse),
{
    for message in receiver {
        if stopping.load(Ordering::Acquire) {
            tracing::debug!("stop requested, dropping queued messages");
            break;
        }
        match worker.handle_message(message) {
            Some(response) => on_response(response),
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::query::{QueryBuilder, DEFAULT_ENDPOINT};
    use crate::app::QueryTarget;
    use crate::domain::Story;
    use std::time::Duration;

    struct Echo;

    impl SearchTransport for Echo {
        fn search(&self, target: &QueryTarget) -> Result<Vec<Story>> {
            Ok(vec![Story::new("1", "", target.term(), "a", 0, 0)])
        }
    }

    #[test]
    fn responses_arrive_in_request_order() {
        let (tx, rx) = mpsc::channel();
        let handle = WorkerHandle::spawn(SearchWorker::new(Echo, 0), move |response| {
            let _ = tx.send(response);
        })
        .unwrap();

        let builder = QueryBuilder::new(DEFAULT_ENDPOINT).unwrap();
        handle.post(WorkerMessage::fetch(1, builder.build("React").unwrap())).unwrap();
        handle.post(WorkerMessage::fetch(2, builder.build("Redux").unwrap())).unwrap();

        let generations: Vec<u64> = (0..2)
            .map(|_| {
                let WorkerResponse::Fetched { generation, .. } =
                    rx.recv_timeout(Duration::from_secs(5)).unwrap();
                generation
            })
            .collect();
        assert_eq!(generations, [1, 2]);

        handle.shutdown().unwrap();
    }

    #[test]
    fn channel_closes_after_shutdown() {
        let handle = WorkerHandle::spawn(SearchWorker::new(Echo, 0), |_| {}).unwrap();
        let sender = handle.sender.clone();
        handle.shutdown().unwrap();

        assert!(sender.send(WorkerMessage::Shutdown).is_err());
    }

    #[test]
    fn queued_fetches_are_skipped_once_stopping() {
        let (sender, receiver) = mpsc::channel();
        let builder = QueryBuilder::new(DEFAULT_ENDPOINT).unwrap();
        sender.send(WorkerMessage::fetch(1, builder.build("React").unwrap())).unwrap();
        sender.send(WorkerMessage::fetch(2, builder.build("Redux").unwrap())).unwrap();
        sender.send(WorkerMessage::Shutdown).unwrap();

        let mut responses = Vec::new();
        let stopping = AtomicBool::new(true);
        run_loop(&SearchWorker::new(Echo, 0), &receiver, &stopping, &mut |r| responses.push(r));

        assert!(responses.is_empty());
    }

    #[test]
    fn queued_fetches_run_until_shutdown_message() {
        let (sender, receiver) = mpsc::channel();
        let builder = QueryBuilder::new(DEFAULT_ENDPOINT).unwrap();
        sender.send(WorkerMessage::fetch(1, builder.build("React").unwrap())).unwrap();
        sender.send(WorkerMessage::Shutdown).unwrap();
        sender.send(WorkerMessage::fetch(2, builder.build("Redux").unwrap())).unwrap();

        let mut responses = Vec::new();
        let stopping = AtomicBool::new(false);
        run_loop(&SearchWorker::new(Echo, 0), &receiver, &stopping, &mut |r| responses.push(r));

        assert_eq!(responses.len(), 1);
    }
}
