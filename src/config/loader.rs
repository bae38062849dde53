//! Configuration loading from the file system

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::types::Config;
use crate::error::{KbdPluginError, Result, ResultExt};

/// `<config dir>/kbd-plugin/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Read and parse a config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<Option<Config>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(KbdPluginError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    serde_json::from_str::<Config>(&contents)
        .map(Some)
        .map_err(|e| KbdPluginError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load configuration from `path`, or from the default location.
///
/// Returns `Config::default()` if the file is missing or broken; a broken
/// file is logged as a warning, never fatal.
#[instrument(name = "load_config")]
pub fn load_config(path: Option<&str>) -> Config {
    let config_path = match path.map(expand_path).or_else(default_config_path) {
        Some(config_path) => config_path,
        None => {
            info!("No config directory available, using defaults");
            return Config::default();
        }
    };

    match load_config_from(&config_path).warn_on_err() {
        Some(Some(config)) => {
            info!(path = %config_path.display(), "Successfully loaded config");
            config
        }
        Some(None) => {
            info!(path = %config_path.display(), "Config file not found, using defaults");
            Config::default()
        }
        None => Config::default(),
    }
}
