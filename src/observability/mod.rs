//! File-based logging for the search client.
//!
//! The client writes structured `tracing` output to a log file in the data
//! directory instead of the terminal, which belongs to the front-end.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → hn-search.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Logs written to `<data dir>/hn-search.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Shared Writer**: The worker thread logs to the same file
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in `config.toml`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
