//! Default configuration values

/// Render named keys as glyphs (⎋, ⇥, →) rather than text
pub const DEFAULT_USE_KEY_SYMBOL: bool = true;

/// Render modifiers as glyphs (⌃⌥⇧⌘) rather than text
pub const DEFAULT_USE_MOD_SYMBOL: bool = true;

/// Join pieces with a visible `+`
pub const DEFAULT_USE_PLUS: bool = false;

/// Directory under the platform config dir holding `config.json`
pub const CONFIG_DIR_NAME: &str = "kbd-plugin";
pub const CONFIG_FILE_NAME: &str = "config.json";
