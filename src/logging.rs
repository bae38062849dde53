//! Structured logging for the plugin process.
//!
//! stdout carries the transformed document back to the host, so logs never
//! go there. This module provides:
//! - **Compact text to stderr** - for whoever runs the host by hand
//! - **JSONL to a file** (opt-in via `--log-file`) - structured for later parsing
//!
//! # Usage
//!
//! ```rust,ignore
//! use kbd_plugin::logging;
//!
//! // Keep the guard alive until exit so the file layer is flushed
//! let _guard = logging::init(None);
//! tracing::info!(event_type = "plugin_start", "Plugin started");
//! ```
//!
//! The filter defaults to `warn` and can be overridden with `RUST_LOG`.

use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file, if one was opened.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// A log file that cannot be opened is reported on stderr and skipped; the
/// plugin still runs.
pub fn init(log_file: Option<&Path>) -> LoggingGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let (json_layer, file_guard) = match log_file.and_then(open_log_file) {
        Some(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init: a host embedding the library may already have a subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    tracing::debug!(
        event_type = "plugin_lifecycle",
        action = "started",
        log_file = ?log_file,
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("[kbd-plugin] Failed to create log directory: {}", e);
            return None;
        }
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[kbd-plugin] Failed to open log file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kbd.jsonl");
        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_under_a_regular_file_fails_softly() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file cannot be used as a directory.
        assert!(open_log_file(&blocker.join("kbd.jsonl")).is_none());
    }
}
