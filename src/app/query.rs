//! Request target derivation from a confirmed search term.
//!
//! The [`QueryBuilder`] turns a submitted term into a [`QueryTarget`]: the
//! endpoint URL with a `query` parameter. Building is pure, so an identical
//! term always yields an identical target. A new target is only built on
//! submission; keystrokes never reach this module.
//!
//! Empty terms are rejected here rather than in the front-end, so that no
//! caller can issue a fetch with an empty query.
//!
//! # Example
//!
//! ```rust
//! use hn_search::app::QueryBuilder;
//!
//! let builder = QueryBuilder::new("https://hn.algolia.com/api/v1/search")?;
//! let target = builder.build("React")?;
//! assert_eq!(target.url().as_str(), "https://hn.algolia.com/api/v1/search?query=React");
//! assert!(builder.build("").is_err());
//! # Ok::<(), hn_search::SearchError>(())
//! ```

use crate::domain::error::{Result, SearchError};
use reqwest::Url;

/// Public Hacker News search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Concrete request derived from a submitted search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryTarget {
    term: String,
    url: Url,
}

impl QueryTarget {
    /// The submitted term this target was built from.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Full request URL, query parameter included.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

/// Builds [`QueryTarget`]s against a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    endpoint: Url,
}

impl QueryBuilder {
    /// Creates a builder for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `endpoint` is not an absolute URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| SearchError::Config(format!("invalid endpoint {endpoint:?}: {e}")))?;
        Ok(Self { endpoint })
    }

    /// Endpoint every target is built against.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Derives the request target for `term`.
    ///
    /// The term is sent verbatim; percent-encoding is applied to the query
    /// string only.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] if `term` is empty.
    pub fn build(&self, term: &str) -> Result<QueryTarget> {
        if term.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("query", term);

        Ok(QueryTarget {
            term: term.to_string(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> QueryBuilder {
        QueryBuilder::new(DEFAULT_ENDPOINT).unwrap()
    }

    #[test]
    fn identical_terms_build_identical_targets() {
        let builder = builder();
        assert_eq!(builder.build("rust").unwrap(), builder.build("rust").unwrap());
        assert_ne!(builder.build("rust").unwrap(), builder.build("Rust").unwrap());
    }

    #[test]
    fn empty_term_is_rejected() {
        let builder = builder();
        assert!(matches!(builder.build(""), Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn term_is_percent_encoded() {
        let builder = builder();
        let target = builder.build("c++ & rust").unwrap();
        assert_eq!(target.term(), "c++ & rust");
        assert_eq!(target.url().query(), Some("query=c%2B%2B+%26+rust"));
    }

    #[test]
    fn invalid_endpoint_is_a_config_error() {
        assert!(matches!(QueryBuilder::new("not a url"), Err(SearchError::Config(_))));
    }
}
