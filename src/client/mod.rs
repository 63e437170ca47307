//! Search endpoint client.
//!
//! # Modules
//!
//! - `transport`: The [`SearchTransport`] seam used by the worker
//! - `http`: Blocking HTTP implementation
//! - `payload`: Response decoding

pub mod http;
pub mod payload;
pub mod transport;

pub use http::HttpTransport;
pub use payload::SearchResponse;
pub use transport::SearchTransport;
