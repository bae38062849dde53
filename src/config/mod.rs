//! Configuration module - rendering preferences
//!
//! This module provides functionality for:
//! - Loading configuration from `<config dir>/kbd-plugin/config.json`
//! - Default values for all settings
//! - Merging command-line overrides on top of the file
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - `Config` and `ConfigOverrides`
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_USE_KEY_SYMBOL, DEFAULT_USE_MOD_SYMBOL, DEFAULT_USE_PLUS};
pub use loader::{default_config_path, expand_path, load_config, load_config_from};
pub use types::{Config, ConfigOverrides};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
