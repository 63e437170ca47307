//! Error types for the search client.
//!
//! This module defines the centralized error type [`SearchError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Not every error reaches the user. Transport and decode failures are folded into
//! a generic fetch failure by the worker, and storage failures are absorbed by the
//! persisted preference, which falls back to session memory.

use thiserror::Error;

/// The main error type for search client operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use hn_search::SearchError;
///
/// fn validate_endpoint() -> Result<(), SearchError> {
///     Err(SearchError::Config("endpoint must be an absolute URL".to_string()))
/// }
///
/// assert!(validate_endpoint().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SearchError {
    /// Preference storage operation failed.
    ///
    /// Occurs when reading from or writing to the preference file fails in a
    /// way that is not a plain I/O error (malformed JSON, serialization).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be sent or its body could not be read.
    ///
    /// Covers connection failures, timeouts and JSON body decoding performed
    /// by `reqwest`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search endpoint answered with a non-2xx status.
    #[error("search endpoint returned status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Communication with the background fetch worker failed.
    ///
    /// Occurs when the worker thread cannot be spawned or its channel is
    /// closed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A submission was attempted with an empty search term.
    ///
    /// Empty terms are never sent to the endpoint.
    #[error("search term is empty")]
    EmptyQuery,
}

/// A specialized `Result` type for search client operations.
pub type Result<T> = std::result::Result<T, SearchError>;
