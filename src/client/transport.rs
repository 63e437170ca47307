//! Transport abstraction for the search endpoint.

use crate::app::QueryTarget;
use crate::domain::error::Result;
use crate::domain::Story;

/// Performs a search request for a prepared target.
///
/// Implementations return decoded stories in endpoint order. Any failure
/// (connection, status, body shape) is an `Err`; the worker folds all of them
/// into a single failure outcome.
pub trait SearchTransport: Send {
    /// Fetches and decodes the stories for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn search(&self, target: &QueryTarget) -> Result<Vec<Story>>;
}
