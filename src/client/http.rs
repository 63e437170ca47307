//! HTTP transport built on the blocking `reqwest` client.

use crate::app::QueryTarget;
use crate::client::payload::SearchResponse;
use crate::client::transport::SearchTransport;
use crate::domain::error::{Result, SearchError};
use crate::domain::Story;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issues `GET` requests against the search endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport.
    ///
    /// `None` disables the request timeout entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

impl SearchTransport for HttpTransport {
    fn search(&self, target: &QueryTarget) -> Result<Vec<Story>> {
        let _span = tracing::debug_span!("http_search", term = %target.term()).entered();

        let response = self.client.get(target.url().clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let payload: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        let stories = payload.into_stories();
        tracing::debug!(count = stories.len(), "search response decoded");
        Ok(stories)
    }
}
