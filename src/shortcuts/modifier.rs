//! The closed set of modifier keys and their display tables.
//!
//! Every modifier has a single-character tag that the tokenizer substitutes
//! for its word aliases, an HTML entity for symbol mode and a full name for
//! text mode and accessible titles.

/// A modifier key.
///
/// Variants are declared in canonical display order, with `Hyper` last since
/// it is not part of the ⌃⌥⇧⌘ sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Function,
    Control,
    Option,
    Shift,
    Command,
    Hyper,
}

impl Modifier {
    pub const ALL: [Modifier; 6] = [
        Modifier::Function,
        Modifier::Control,
        Modifier::Option,
        Modifier::Shift,
        Modifier::Command,
        Modifier::Hyper,
    ];

    /// Canonical tag written into a combo string in place of an alias.
    pub fn tag(self) -> char {
        match self {
            Modifier::Function => '*',
            Modifier::Control => '^',
            Modifier::Option => '~',
            Modifier::Shift => '$',
            Modifier::Command => '@',
            Modifier::Hyper => '%',
        }
    }

    /// Resolve a tag, or one of the four Apple modifier glyphs, to a modifier.
    ///
    /// Matching is exact: tags are case-sensitive single characters.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Modifier::Function),
            '^' | '⌃' => Some(Modifier::Control),
            '~' | '⌥' => Some(Modifier::Option),
            '$' | '⇧' => Some(Modifier::Shift),
            '@' | '⌘' => Some(Modifier::Command),
            '%' => Some(Modifier::Hyper),
            _ => None,
        }
    }

    /// HTML entity emitted in symbol mode.
    pub fn entity(self) -> &'static str {
        match self {
            Modifier::Function => "Fn",
            Modifier::Control => "&#8963;",
            Modifier::Option => "&#8997;",
            Modifier::Shift => "&#8679;",
            Modifier::Command => "&#8984;",
            Modifier::Hyper => "Hyper",
        }
    }

    /// Full display name, used for text mode and for titles.
    pub fn name(self) -> &'static str {
        match self {
            Modifier::Function => "Function",
            Modifier::Control => "Control",
            Modifier::Option => "Option",
            Modifier::Shift => "Shift",
            Modifier::Command => "Command",
            Modifier::Hyper => "Hyper (Control+Option+Shift+Command)",
        }
    }

    /// Position in the canonical order. Lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Modifier::Function => 0,
            Modifier::Control => 1,
            Modifier::Option => 2,
            Modifier::Shift => 3,
            Modifier::Command => 4,
            Modifier::Hyper => 5,
        }
    }

    pub fn display(self, use_symbol: bool) -> &'static str {
        if use_symbol {
            self.entity()
        } else {
            self.name()
        }
    }
}

/// Remove duplicates and sort into canonical order: Fn ⌃ ⌥ ⇧ ⌘, then Hyper.
///
/// The sort is stable, so equal ranks keep their input order.
pub fn sort_modifiers(mods: &[Modifier]) -> Vec<Modifier> {
    let mut unique: Vec<Modifier> = Vec::with_capacity(mods.len());
    for m in mods {
        if !unique.contains(m) {
            unique.push(*m);
        }
    }
    unique.sort_by_key(|m| m.rank());
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_char() {
        for m in Modifier::ALL {
            assert_eq!(Modifier::from_char(m.tag()), Some(m));
        }
    }

    #[test]
    fn test_glyphs_resolve_for_apple_modifiers() {
        assert_eq!(Modifier::from_char('⌘'), Some(Modifier::Command));
        assert_eq!(Modifier::from_char('⇧'), Some(Modifier::Shift));
        assert_eq!(Modifier::from_char('⌥'), Some(Modifier::Option));
        assert_eq!(Modifier::from_char('⌃'), Some(Modifier::Control));
        assert_eq!(Modifier::from_char('a'), None);
    }

    #[test]
    fn test_sort_is_canonical_and_deduplicated() {
        let sorted = sort_modifiers(&[
            Modifier::Command,
            Modifier::Hyper,
            Modifier::Shift,
            Modifier::Command,
            Modifier::Function,
            Modifier::Control,
        ]);
        assert_eq!(
            sorted,
            vec![
                Modifier::Function,
                Modifier::Control,
                Modifier::Shift,
                Modifier::Command,
                Modifier::Hyper,
            ]
        );
    }

    #[test]
    fn test_display_switches_between_entity_and_name() {
        assert_eq!(Modifier::Command.display(true), "&#8984;");
        assert_eq!(Modifier::Command.display(false), "Command");
        assert_eq!(Modifier::Function.display(true), "Fn");
        assert_eq!(Modifier::Function.display(false), "Function");
    }
}
