//! Tracing initialization and subscriber setup.
//!
//! This module configures the global tracing subscriber: an `EnvFilter`
//! followed by a plain-text `fmt` layer writing into a rotating log file.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "hn-search.log";

/// Initializes the tracing subscriber with rotating file output.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates `data_dir` if it doesn't exist
/// - Silently does nothing if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```no_run
/// use hn_search::observability::init_tracing;
/// use hn_search::Config;
/// use std::path::Path;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config, Path::new("/tmp/hn-search"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config, data_dir: &Path) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::new(level)
    });

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let log_path = writer.path().to_path_buf();
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_thread_names(true)
        .with_writer(writer);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(path = ?log_path, "tracing initialized");
    }
}
