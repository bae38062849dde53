//! Key tables: shift mapping, punctuation clarification and named keys.

use std::sync::LazyLock;

use regex::Regex;

/// Unshifted punctuation and the character the same key produces with Shift.
const SHIFT_PAIRS: &[(char, char)] = &[
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
    (';', ':'),
    ('\'', '"'),
    ('[', '{'),
    (']', '}'),
    ('\\', '|'),
    ('-', '_'),
    ('=', '+'),
];

/// Characters that can only be typed with Shift held.
const NATURALLY_SHIFTED: &[char] = &[
    '<', '>', '?', ':', '"', '{', '}', '|', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_',
    '+',
];

/// Readable titles for characters that are easy to misread on their own.
const CLARIFICATIONS: &[(&str, &str)] = &[
    (",", "Comma (,)"),
    (".", "Period (.)"),
    (";", "Semicolon (;)"),
    (":", "Colon (:)"),
    ("`", "Backtick (`)"),
    ("-", "Minus Sign (-)"),
    ("+", "Plus Sign (+)"),
    ("=", "Equals Sign (=)"),
    ("_", "Underscore (_)"),
    ("~", "Tilde (~)"),
    ("\\", "Backslash (\\)"),
    ("|", "Pipe (|)"),
    ("←", "Left Arrow (←)"),
    ("→", "Right Arrow (→)"),
    ("↑", "Up Arrow (↑)"),
    ("↓", "Down Arrow (↓)"),
];

/// One row of the named-key table. `text`, `symbol` and `title` may refer to
/// capture groups of `pattern` using `${n}`.
struct NamedKeyRule {
    pattern: Regex,
    text: &'static str,
    symbol: &'static str,
    title: &'static str,
}

/// Named keys, matched against the lowercased, trimmed key. First match wins.
static NAMED_KEYS: LazyLock<Vec<NamedKeyRule>> = LazyLock::new(|| {
    [
        (r"^f(\d{1,2})$", "F${1}", "F${1}", "F${1} Key"),
        (r"^apple$", "Apple", "&#63743;", "Apple menu"),
        (r"^tab$", "Tab", "&#8677;", "Tab Key"),
        (r"^caps(?:lock)?$", "Caps Lock", "&#8682;", "Caps Lock Key"),
        (r"^eject$", "Eject", "&#9167;", "Eject Key"),
        (r"^return$", "Return", "&#9166;", "Return Key"),
        (r"^enter$", "Enter", "&#8996;", "Enter (Fn Return) Key"),
        (r"^(?:del(?:ete)?|back(?:space)?)$", "Del", "&#9003;", "Delete"),
        (
            r"^fwddel(?:ete)?$",
            "Fwd Del",
            "&#8998;",
            "Forward Delete (Fn Delete)",
        ),
        (r"^esc(?:ape)?$", "Esc", "&#9099;", "Escape Key"),
        (r"^(?:right|rt)$", "Right Arrow", "&#8594;", "Right Arrow Key"),
        (r"^(?:left|lt)$", "Left Arrow", "&#8592;", "Left Arrow Key"),
        (r"^up$", "Up Arrow", "&#8593;", "Up Arrow Key"),
        (r"^(?:down|dn)$", "Down Arrow", "&#8595;", "Down Arrow Key"),
        (r"^p(?:age|g)up$", "PgUp", "&#8670;", "Page Up Key"),
        (r"^p(?:age|g)d(?:ow)?n$", "PgDn", "&#8671;", "Page Down Key"),
        (r"^home$", "Home", "&#8598;", "Home Key"),
        (r"^end$", "End", "&#8600;", "End Key"),
        (r"^semicolon$", "Semicolon", ";", "Semicolon"),
        (
            r"^(?:single(?:[- ]?quote?)?|quote?)$",
            "Single Quote",
            "'",
            "Single Quote",
        ),
        (
            r"^double(?:[- ]?quote?)?$",
            "Double Quote",
            "&quot;",
            "Double Quote",
        ),
        (
            r"^click$",
            "click",
            r#"<i class="fas fa-mouse-pointer"></i>"#,
            "left click",
        ),
        (
            r"^hyper",
            "Hyper",
            "Hyper",
            "Hyper (Control+Option+Shift+Command)",
        ),
    ]
    .into_iter()
    .map(|(pattern, text, symbol, title)| NamedKeyRule {
        pattern: Regex::new(pattern).expect("named key pattern is valid"),
        text,
        symbol,
        title,
    })
    .collect()
});

/// The display form of a key and its accessible title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedKey {
    pub display: String,
    pub title: String,
}

/// The key part of a combo, after modifiers have been removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyToken(String);

impl KeyToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The single character this key consists of, if any.
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// True for one uppercase ASCII letter or one naturally shifted symbol.
    pub fn implies_shift(&self) -> bool {
        self.single_char()
            .is_some_and(|c| c.is_ascii_uppercase() || NATURALLY_SHIFTED.contains(&c))
    }

    /// Map an unshifted punctuation key to its shifted character.
    /// Anything else, including every multi-character key, is returned as is.
    pub fn shifted(&self) -> KeyToken {
        let mapped = self.single_char().and_then(|c| {
            SHIFT_PAIRS
                .iter()
                .find(|(lower, _)| *lower == c)
                .map(|(_, upper)| upper.to_string())
        });
        match mapped {
            Some(upper) => KeyToken(upper),
            None => self.clone(),
        }
    }

    pub fn to_uppercase(&self) -> KeyToken {
        KeyToken(self.0.to_uppercase())
    }

    /// Readable title for ambiguous punctuation and arrows, else the key itself.
    pub fn clarify(&self) -> String {
        clarify(&self.0)
    }

    /// Resolve against the named-key table, falling back to the key itself
    /// with a capitalized title. Table forms are already markup; fallback
    /// text is HTML-escaped.
    pub fn resolve(&self, use_symbol: bool) -> NamedKey {
        let needle = self.0.trim().to_lowercase();
        for rule in NAMED_KEYS.iter() {
            if let Some(caps) = rule.pattern.captures(&needle) {
                let template = if use_symbol { rule.symbol } else { rule.text };
                let mut display = String::new();
                caps.expand(template, &mut display);
                let mut title = String::new();
                caps.expand(rule.title, &mut title);
                return NamedKey { display, title };
            }
        }
        NamedKey {
            display: escape_html(&self.0),
            title: escape_html(&capitalize(&self.0)),
        }
    }
}

pub fn clarify(s: &str) -> String {
    CLARIFICATIONS
        .iter()
        .find(|(raw, _)| *raw == s)
        .map(|(_, readable)| readable.to_string())
        .unwrap_or_else(|| s.to_string())
}

/// Escape the characters that are unsafe in element text or a quoted
/// attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(key: &str, use_symbol: bool) -> (String, String) {
        let named = KeyToken::new(key).resolve(use_symbol);
        (named.display, named.title)
    }

    fn pair(display: &str, title: &str) -> (String, String) {
        (display.to_string(), title.to_string())
    }

    #[test]
    fn test_shift_pairs() {
        assert_eq!(KeyToken::new(",").shifted().as_str(), "<");
        assert_eq!(KeyToken::new("'").shifted().as_str(), "\"");
        assert_eq!(KeyToken::new("\\").shifted().as_str(), "|");
        assert_eq!(KeyToken::new("=").shifted().as_str(), "+");
        assert_eq!(KeyToken::new("1").shifted().as_str(), "1");
        assert_eq!(KeyToken::new("a").shifted().as_str(), "a");
        assert_eq!(KeyToken::new("tab").shifted().as_str(), "tab");
    }

    #[test]
    fn test_implies_shift() {
        assert!(KeyToken::new("A").implies_shift());
        assert!(KeyToken::new("?").implies_shift());
        assert!(KeyToken::new("(").implies_shift());
        assert!(!KeyToken::new("a").implies_shift());
        assert!(!KeyToken::new("/").implies_shift());
        assert!(!KeyToken::new("AB").implies_shift());
    }

    #[test]
    fn test_clarify() {
        assert_eq!(clarify(","), "Comma (,)");
        assert_eq!(clarify("→"), "Right Arrow (→)");
        assert_eq!(clarify("A"), "A");
    }

    #[test]
    fn test_function_keys_case_and_whitespace_insensitive() {
        for key in ["F1", "f1", " f1 "] {
            assert_eq!(resolve(key, true), pair("F1", "F1 Key"));
        }
        assert_eq!(resolve("f12", false), pair("F12", "F12 Key"));
        assert_eq!(resolve("F123", true).1, "F123");
    }

    #[test]
    fn test_named_keys_symbol_and_text_forms() {
        assert_eq!(resolve("Escape", true), pair("&#9099;", "Escape Key"));
        assert_eq!(resolve("esc", false), pair("Esc", "Escape Key"));
        assert_eq!(resolve("backspace", true), pair("&#9003;", "Delete"));
        assert_eq!(
            resolve("fwddelete", false),
            pair("Fwd Del", "Forward Delete (Fn Delete)")
        );
        assert_eq!(resolve("pgdown", true), pair("&#8671;", "Page Down Key"));
        assert_eq!(resolve("PageUp", false), pair("PgUp", "Page Up Key"));
        assert_eq!(resolve("dn", true), pair("&#8595;", "Down Arrow Key"));
        assert_eq!(resolve("capslock", true).1, "Caps Lock Key");
        assert_eq!(resolve("tab", false), pair("Tab", "Tab Key"));
    }

    #[test]
    fn test_quote_names() {
        assert_eq!(resolve("quote", true), pair("'", "Single Quote"));
        assert_eq!(resolve("singlequote", true).1, "Single Quote");
        assert_eq!(resolve("doublequote", false).0, "Double Quote");
        assert_eq!(resolve("semicolon", true), pair(";", "Semicolon"));
    }

    #[test]
    fn test_click_and_hyper() {
        let (display, title) = resolve("click", true);
        assert!(display.contains("fa-mouse-pointer"));
        assert_eq!(title, "left click");
        assert_eq!(resolve("hyperkey", true).0, "Hyper");
    }

    #[test]
    fn test_unmatched_falls_back_to_capitalized() {
        assert_eq!(resolve("space", true), pair("space", "Space"));
        assert_eq!(resolve("SPACE", false), pair("SPACE", "Space"));
    }

    #[test]
    fn test_fallback_text_is_html_escaped() {
        assert_eq!(resolve("<", true), pair("&lt;", "&lt;"));
        assert_eq!(resolve("&", false), pair("&amp;", "&amp;"));
        assert_eq!(resolve("\"", true), pair("&quot;", "&quot;"));
        assert_eq!(resolve("a>b", true), pair("a&gt;b", "A&gt;b"));
    }

    #[test]
    fn test_escape_html_leaves_plain_text() {
        assert_eq!(escape_html("Space"), "Space");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("hELLO"), "Hello");
    }
}
