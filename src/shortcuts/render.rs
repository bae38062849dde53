//! HTML rendering of parsed combos and of whole `kbd` markup fields.

use serde::{Deserialize, Serialize};

use super::keys::{clarify, KeyToken};
use super::modifier::{sort_modifiers, Modifier};
use super::tokenizer::ComboToken;

/// Inserted between rendered pieces when `use_plus` is set.
pub const COMBINER: &str = r#"<span class="keycombo combiner">+</span>"#;

/// Inserted between alternative combos.
pub const SEPARATOR: &str = r#"<span class="keycombo separator">/</span>"#;

/// Alternatives in a markup field are separated by a slash with a space on
/// each side, so a bare `/` can still be used as a key.
const ALTERNATIVE_DELIMITER: &str = " / ";

/// Output mode switches for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Render named keys as glyphs instead of their text names.
    pub use_key_symbol: bool,
    /// Render modifiers as glyphs instead of their text names.
    pub use_mod_symbol: bool,
    /// Put a visible `+` between pieces (only with modifier glyphs).
    pub use_plus: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_key_symbol: true,
            use_mod_symbol: true,
            use_plus: false,
        }
    }
}

/// One keyboard shortcut: modifiers in canonical order plus an optional key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Combo {
    pub modifiers: Vec<Modifier>,
    pub key: KeyToken,
}

impl Combo {
    /// Parse one alternative, resolving implicit Shift and key case.
    ///
    /// A lone uppercase letter or naturally shifted symbol with no modifiers
    /// gains Shift. With Shift held, unshifted punctuation becomes its shifted
    /// character. Single-character keys are always uppercased.
    pub fn parse(raw: &str) -> Self {
        let tokens = ComboToken::new(raw).tokenize();
        let mut modifiers = sort_modifiers(&tokens.modifiers);
        let mut key = KeyToken::new(tokens.key);

        if key.single_char().is_some() {
            if modifiers.is_empty() && key.implies_shift() {
                modifiers.push(Modifier::Shift);
            }
            if modifiers.contains(&Modifier::Shift) {
                key = key.shifted();
            }
            key = key.to_uppercase();
        } else if modifiers.contains(&Modifier::Shift) {
            key = key.shifted();
        }

        Self { modifiers, key }
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.key.is_empty()
    }

    /// Render as a `keycombo` span, or `None` for an empty combo.
    pub fn render(&self, options: &RenderOptions) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut pieces: Vec<String> = Vec::with_capacity(self.modifiers.len() + 1);
        let mut titles: Vec<String> = Vec::with_capacity(self.modifiers.len() + 1);

        let mod_class = if options.use_mod_symbol {
            "mod symbol"
        } else {
            "mod"
        };
        for modifier in &self.modifiers {
            pieces.push(format!(
                r#"<kbd class="{}">{}</kbd>"#,
                mod_class,
                modifier.display(options.use_mod_symbol)
            ));
            titles.push(modifier.name().to_string());
        }

        if !self.key.is_empty() {
            let named = self.key.resolve(options.use_key_symbol);
            let key_class = if options.use_key_symbol {
                "key symbol"
            } else {
                "key"
            };
            pieces.push(format!(
                r#"<kbd class="{}">{}</kbd>"#,
                key_class, named.display
            ));
            let title = if named.title.chars().count() == 1 {
                clarify(&named.title)
            } else {
                named.title
            };
            titles.push(title);
        }

        let (body, layout) = match (options.use_mod_symbol, options.use_plus) {
            (true, false) => (pieces.concat(), "combined"),
            (true, true) => (pieces.join(COMBINER), "separated"),
            (false, _) => (pieces.join("-"), "separated"),
        };

        Some(format!(
            r#"<span class="keycombo {}" title="{}">{}</span>"#,
            layout,
            titles.join("-"),
            body
        ))
    }
}

/// Render a whole `kbd` markup field. Alternatives are rendered in source
/// order and joined with [`SEPARATOR`]; empty ones are dropped.
pub fn render_markup(markup: &str, options: &RenderOptions) -> String {
    markup
        .split(ALTERNATIVE_DELIMITER)
        .filter_map(|alternative| Combo::parse(alternative).render(options))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
