//! Combo tokenizer: turns `Cmd-Shift-A` into modifier tags plus a key string.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::modifier::Modifier;

/// Word aliases for each modifier, matched case-insensitively on word
/// boundaries. Applied in this order.
static ALIASES: LazyLock<Vec<(Regex, Modifier)>> = LazyLock::new(|| {
    [
        (r"(?i)\b(?:comm(?:and)?|cmd|clover)\b", Modifier::Command),
        (r"(?i)\b(?:cont(?:rol)?|ctr?l)\b", Modifier::Control),
        (r"(?i)\b(?:opt(?:ion)?|alt)\b", Modifier::Option),
        (r"(?i)\bshift\b", Modifier::Shift),
        (r"(?i)\b(?:func(?:tion)?|fn)\b", Modifier::Function),
        (r"(?i)\bhyper\b", Modifier::Hyper),
    ]
    .into_iter()
    .map(|(pattern, m)| (Regex::new(pattern).expect("alias pattern is valid"), m))
    .collect()
});

/// One raw alternative from a `kbd` markup field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboToken(String);

/// A combo split into its modifiers (deduplicated, input order) and the
/// residual key text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl ComboToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Collapse separator hyphens and replace modifier words with their tags.
    ///
    /// A hyphen only separates when both neighbours are non-whitespace, so a
    /// lone `-` (or the trailing one in `ctrl--`) survives as a key.
    pub fn normalize(&self) -> ComboToken {
        let mut text = collapse_hyphens(&self.0);
        for (re, modifier) in ALIASES.iter() {
            let tag = modifier.tag().to_string();
            text = re.replace_all(&text, NoExpand(&tag)).into_owned();
        }
        ComboToken(text)
    }

    /// Normalize, then split characters into modifiers and key text.
    /// Spaces are skipped.
    pub fn tokenize(&self) -> Tokens {
        let normalized = self.normalize();
        let mut tokens = Tokens::default();
        for c in normalized.0.trim().chars() {
            if c == ' ' {
                continue;
            }
            match Modifier::from_char(c) {
                Some(m) => {
                    if !tokens.modifiers.contains(&m) {
                        tokens.modifiers.push(m);
                    }
                }
                None => tokens.key.push(c),
            }
        }
        tokens
    }
}

fn collapse_hyphens(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let separates = c == '-'
                && i > 0
                && !chars[i - 1].is_whitespace()
                && chars.get(i + 1).is_some_and(|next| !next.is_whitespace());
            if separates {
                ' '
            } else {
                c
            }
        })
        .collect()
}
