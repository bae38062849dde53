//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::shortcuts::RenderOptions;

/// User configuration, read from `config.json`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glyphs for named keys (default: true)
    #[serde(default = "default_use_key_symbol")]
    pub use_key_symbol: bool,
    /// Glyphs for modifiers (default: true)
    #[serde(default = "default_use_mod_symbol")]
    pub use_mod_symbol: bool,
    /// Visible `+` between pieces when modifiers are glyphs (default: false)
    #[serde(default = "default_use_plus")]
    pub use_plus: bool,
}

fn default_use_key_symbol() -> bool {
    DEFAULT_USE_KEY_SYMBOL
}
fn default_use_mod_symbol() -> bool {
    DEFAULT_USE_MOD_SYMBOL
}
fn default_use_plus() -> bool {
    DEFAULT_USE_PLUS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_key_symbol: DEFAULT_USE_KEY_SYMBOL,
            use_mod_symbol: DEFAULT_USE_MOD_SYMBOL,
            use_plus: DEFAULT_USE_PLUS,
        }
    }
}

/// Command-line switches that take precedence over the file.
///
/// Each switch only ever turns a default off (or `+` on); an unset switch
/// leaves the file's value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub text_keys: bool,
    pub text_mods: bool,
    pub plus: bool,
}

impl Config {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.text_keys {
            self.use_key_symbol = false;
        }
        if overrides.text_mods {
            self.use_mod_symbol = false;
        }
        if overrides.plus {
            self.use_plus = true;
        }
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            use_key_symbol: self.use_key_symbol,
            use_mod_symbol: self.use_mod_symbol,
            use_plus: self.use_plus,
        }
    }
}
