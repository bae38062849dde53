//! Keyboard shortcut notation rendered as HTML.
//!
//! This module provides:
//! - Modifier alias normalization (`cmd`, `command`, `clover` → ⌘)
//! - Canonical modifier ordering (Fn ⌃ ⌥ ⇧ ⌘)
//! - Shift resolution and named-key lookup
//! - HTML assembly with accessible titles
//!
//! # Example
//!
//! ```
//! use kbd_plugin::shortcuts::{render_markup, RenderOptions};
//!
//! let html = render_markup("ctrl-c / cmd-c", &RenderOptions::default());
//! assert!(html.contains(r#"<span class="keycombo separator">/</span>"#));
//! ```

mod keys;
mod modifier;
mod render;
mod tokenizer;


pub use keys::{capitalize, clarify, escape_html, KeyToken, NamedKey};
pub use modifier::{sort_modifiers, Modifier};
pub use render::{render_markup, Combo, RenderOptions, COMBINER, SEPARATOR};
pub use tokenizer::{ComboToken, Tokens};
