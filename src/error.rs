use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

/// Errors at the plugin boundary. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum KbdPluginError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse plugin request: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Config loading failed for '{path}': {message}")]
    Config { path: PathBuf, message: String },
}

impl KbdPluginError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Could not read or write plugin data: {}", e),
            Self::Payload(e) => format!("Invalid request from host: {}", e),
            Self::Config { path, message } => {
                format!("Configuration issue in {}: {}", path.display(), message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KbdPluginError>;

/// Extension trait for logging recoverable errors with the caller location.
///
/// ```ignore
/// use kbd_plugin::error::ResultExt;
///
/// // Log and fall back to defaults if the config file is broken
/// let config = load_from(path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
