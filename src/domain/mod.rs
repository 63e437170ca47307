//! Domain layer for the search client.
//!
//! This module contains the core domain types, independent of HTTP, storage or
//! terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: Story record returned by the search endpoint
//!
//! # Examples
//!
//! ```
//! use hn_search::domain::{Result, Story};
//!
//! fn sample() -> Result<Story> {
//!     Ok(Story::new("1", "https://example.com", "Hello", "pg", 3, 10))
//! }
//! # assert_eq!(sample().unwrap().id, "1");
//! ```

pub mod error;
pub mod story;

pub use error::{Result, SearchError};
pub use story::Story;
