//! Separator predicates and their registry
//!
//! A separator predicate answers one question about a single character: must
//! a line break next to it be kept? The registry holds any number of named
//! predicates; a boundary is kept when any of them accepts either side.

use crate::width::is_narrow;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Pure predicate over one boundary side
///
/// `None` stands for a missing character (an empty adjacent line).
pub trait SeparatorPredicate: Send + Sync {
    /// Check whether a line break adjacent to `ch` must be kept
    fn matches(&self, ch: Option<char>) -> bool;
}

impl<F> SeparatorPredicate for F
where
    F: Fn(Option<char>) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, ch: Option<char>) -> bool {
        self(ch)
    }
}

/// Built-in separator presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorPreset {
    /// Any narrow character, including a missing one
    NarrowChars,
    /// ASCII letters
    NarrowAlpha,
    /// ASCII digits
    NarrowDigit,
    /// ASCII punctuation and symbols
    NarrowSymbol,
    /// Multi-byte Latin, Greek and Cyrillic letters
    WideAlpha,
    /// Fullwidth digits
    WideDigit,
}

impl SeparatorPreset {
    /// All presets
    pub const ALL: [SeparatorPreset; 6] = [
        SeparatorPreset::NarrowChars,
        SeparatorPreset::NarrowAlpha,
        SeparatorPreset::NarrowDigit,
        SeparatorPreset::NarrowSymbol,
        SeparatorPreset::WideAlpha,
        SeparatorPreset::WideDigit,
    ];

    /// Reserved registry key
    pub fn key(self) -> &'static str {
        match self {
            SeparatorPreset::NarrowChars => "single_all",
            SeparatorPreset::NarrowAlpha => "single_alpha",
            SeparatorPreset::NarrowDigit => "single_numeric",
            SeparatorPreset::NarrowSymbol => "single_symbol",
            SeparatorPreset::WideAlpha => "multi_alpha",
            SeparatorPreset::WideDigit => "multi_numeric",
        }
    }

    /// Look up a preset by its reserved key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.key() == key)
    }

    /// Evaluate the preset's predicate
    pub fn matches(self, ch: Option<char>) -> bool {
        match self {
            SeparatorPreset::NarrowChars => is_narrow(ch),
            SeparatorPreset::NarrowAlpha => ch.is_some_and(|c| c.is_ascii_alphabetic()),
            SeparatorPreset::NarrowDigit => ch.is_some_and(|c| c.is_ascii_digit()),
            SeparatorPreset::NarrowSymbol => ch.is_some_and(|c| c.is_ascii_punctuation()),
            SeparatorPreset::WideAlpha => ch.is_some_and(is_wide_script_letter),
            SeparatorPreset::WideDigit => ch.is_some_and(|c| matches!(c, '０'..='９')),
        }
    }
}

impl SeparatorPredicate for SeparatorPreset {
    #[inline]
    fn matches(&self, ch: Option<char>) -> bool {
        SeparatorPreset::matches(*self, ch)
    }
}

impl fmt::Display for SeparatorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn is_wide_script_letter(ch: char) -> bool {
    static SCRIPT_LETTER: OnceLock<Regex> = OnceLock::new();

    if ch.len_utf8() == 1 {
        return false;
    }
    let regex = SCRIPT_LETTER.get_or_init(|| {
        Regex::new(r"^[\p{Latin}\p{Greek}\p{Cyrillic}]$").expect("built-in script pattern is valid")
    });
    let mut buf = [0u8; 4];
    regex.is_match(ch.encode_utf8(&mut buf))
}

/// Named set of separator predicates
#[derive(Clone, Default)]
pub struct SeparatorRegistry {
    entries: HashMap<String, Arc<dyn SeparatorPredicate>>,
}

impl SeparatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a predicate, replacing any previous one under the same key
    pub fn register<P>(&mut self, key: impl Into<String>, predicate: P)
    where
        P: SeparatorPredicate + 'static,
    {
        let key = key.into();
        log::debug!("registering separator '{key}'");
        self.entries.insert(key, Arc::new(predicate));
    }

    /// Remove the predicate under `key`; absent keys are ignored
    pub fn unregister(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            log::debug!("unregistered separator '{key}'");
        }
    }

    /// Install or remove a built-in preset
    pub fn set_preset(&mut self, preset: SeparatorPreset, enabled: bool) {
        if enabled {
            self.register(preset.key(), preset);
        } else {
            self.unregister(preset.key());
        }
    }

    /// Check whether any registered predicate accepts `ch`
    #[inline]
    pub fn any_matches(&self, ch: Option<char>) -> bool {
        self.entries.values().any(|predicate| predicate.matches(ch))
    }

    /// Check whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered predicates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SeparatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("SeparatorRegistry")
            .field("keys", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_keys_round_trip() {
        for preset in SeparatorPreset::ALL {
            assert_eq!(SeparatorPreset::from_key(preset.key()), Some(preset));
        }
        assert_eq!(SeparatorPreset::from_key("unknown"), None);
    }

    #[test]
    fn test_narrow_presets() {
        use SeparatorPreset::*;

        assert!(NarrowChars.matches(Some('a')));
        assert!(NarrowChars.matches(Some('!')));
        assert!(NarrowChars.matches(None));
        assert!(!NarrowChars.matches(Some('全')));

        assert!(NarrowAlpha.matches(Some('q')));
        assert!(!NarrowAlpha.matches(Some('1')));
        assert!(!NarrowAlpha.matches(Some('Ａ')));
        assert!(!NarrowAlpha.matches(None));

        assert!(NarrowDigit.matches(Some('5')));
        assert!(!NarrowDigit.matches(Some('５')));
        assert!(!NarrowDigit.matches(None));

        for ch in "!?#$%&'()*+,-./:;<=>@[\\]^_`{|}~".chars() {
            assert!(NarrowSymbol.matches(Some(ch)), "{ch:?}");
        }
        assert!(!NarrowSymbol.matches(Some(' ')));
        assert!(!NarrowSymbol.matches(Some('a')));
        assert!(!NarrowSymbol.matches(Some('！')));
        assert!(!NarrowSymbol.matches(None));
    }

    #[test]
    fn test_wide_presets() {
        use SeparatorPreset::*;

        for ch in ['Ａ', 'ｚ', 'é', 'Ω', 'Ж'] {
            assert!(WideAlpha.matches(Some(ch)), "{ch:?}");
        }
        assert!(!WideAlpha.matches(Some('A')));
        assert!(!WideAlpha.matches(Some('１')));
        assert!(!WideAlpha.matches(Some('全')));
        assert!(!WideAlpha.matches(None));

        assert!(WideDigit.matches(Some('０')));
        assert!(WideDigit.matches(Some('９')));
        assert!(!WideDigit.matches(Some('9')));
        assert!(!WideDigit.matches(Some('Ａ')));
        assert!(!WideDigit.matches(None));
    }

    #[test]
    fn test_registry_register_and_unregister() {
        let mut registry = SeparatorRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.any_matches(Some('「')));

        registry.register("bracket", |ch: Option<char>| ch == Some('「'));
        assert!(registry.contains("bracket"));
        assert!(registry.any_matches(Some('「')));
        assert!(!registry.any_matches(Some('」')));

        registry.unregister("bracket");
        registry.unregister("bracket");
        assert!(registry.is_empty());
        assert!(!registry.any_matches(Some('「')));
    }

    #[test]
    fn test_register_replaces_existing_key() {
        let mut registry = SeparatorRegistry::new();
        registry.register("custom", |ch: Option<char>| ch == Some('a'));
        registry.register("custom", |ch: Option<char>| ch == Some('b'));

        assert_eq!(registry.len(), 1);
        assert!(!registry.any_matches(Some('a')));
        assert!(registry.any_matches(Some('b')));
    }

    #[test]
    fn test_disabling_preset_leaves_others() {
        let mut registry = SeparatorRegistry::new();
        registry.set_preset(SeparatorPreset::NarrowDigit, true);
        registry.set_preset(SeparatorPreset::WideDigit, true);
        registry.register("custom", |_: Option<char>| false);

        registry.set_preset(SeparatorPreset::NarrowDigit, false);

        let mut keys: Vec<&str> = registry.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["custom", "multi_numeric"]);
        assert!(!registry.any_matches(Some('1')));
        assert!(registry.any_matches(Some('１')));
    }

    #[test]
    fn test_debug_lists_sorted_keys() {
        let mut registry = SeparatorRegistry::new();
        registry.set_preset(SeparatorPreset::WideAlpha, true);
        registry.set_preset(SeparatorPreset::NarrowAlpha, true);
        assert_eq!(
            format!("{registry:?}"),
            r#"SeparatorRegistry { keys: ["multi_alpha", "single_alpha"] }"#
        );
    }
}
