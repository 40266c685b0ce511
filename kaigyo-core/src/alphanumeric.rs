//! Alphanumeric detection
//!
//! A boundary between two alphanumeric characters is always kept so that
//! digits and words are never fused together. What counts as alphanumeric is
//! a replaceable regular expression that must accept or reject exactly one
//! character.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Built-in expression: ASCII and fullwidth digits, plus Latin, Greek and
/// Cyrillic letters of either width
pub const DEFAULT_ALPHANUMERIC_PATTERN: &str = r"[0-9０-９\p{Latin}\p{Greek}\p{Cyrillic}]";

static DEFAULT: OnceLock<AlphanumericPattern> = OnceLock::new();

/// Single-character classification rule for alphanumerics
#[derive(Debug, Clone)]
pub struct AlphanumericPattern {
    source: String,
    regex: Regex,
}

impl AlphanumericPattern {
    /// Compile a pattern from a regular expression
    ///
    /// The expression is anchored on both ends, so it is tested against the
    /// whole one-character input rather than searched within it.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let source = pattern.into();
        let regex =
            Regex::new(&format!("^(?:{source})$")).map_err(|e| Error::InvalidPattern {
                pattern: source.clone(),
                source: e,
            })?;
        log::debug!("compiled alphanumeric pattern '{source}'");
        Ok(Self { source, regex })
    }

    /// The expression as supplied, without anchoring
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test a single character
    #[inline]
    pub fn matches_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(ch.encode_utf8(&mut buf))
    }

    /// Test a boundary side; a missing character is never alphanumeric
    #[inline]
    pub fn is_alphanumeric(&self, ch: Option<char>) -> bool {
        ch.is_some_and(|c| self.matches_char(c))
    }
}

impl Default for AlphanumericPattern {
    fn default() -> Self {
        DEFAULT
            .get_or_init(|| {
                Self::new(DEFAULT_ALPHANUMERIC_PATTERN)
                    .expect("built-in alphanumeric pattern is valid")
            })
            .clone()
    }
}

impl PartialEq for AlphanumericPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for AlphanumericPattern {}

impl FromStr for AlphanumericPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for AlphanumericPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_digits_of_both_widths() {
        let pattern = AlphanumericPattern::default();
        for ch in "0123456789０１２３４５６７８９".chars() {
            assert!(pattern.matches_char(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_default_matches_scripts_of_both_widths() {
        let pattern = AlphanumericPattern::default();
        for ch in ['a', 'Z', 'Ａ', 'ｚ', 'é', 'ß', 'α', 'Ω', 'д', 'Ж'] {
            assert!(pattern.matches_char(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_default_rejects_japanese_and_symbols() {
        let pattern = AlphanumericPattern::default();
        for ch in ['全', 'あ', 'ア', '。', '、', '！', '!', ' ', '-', '_'] {
            assert!(!pattern.matches_char(ch), "{ch:?}");
        }
        assert!(!pattern.is_alphanumeric(None));
    }

    #[test]
    fn test_custom_pattern_is_anchored() {
        // Unanchored, "a|b" would match anything containing either letter
        let pattern = AlphanumericPattern::new("[0-9]|x").unwrap();
        assert!(pattern.matches_char('7'));
        assert!(pattern.matches_char('x'));
        assert!(!pattern.matches_char('y'));
        assert!(!pattern.matches_char('７'));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = AlphanumericPattern::new("[0-9").unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[0-9"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_as_str_and_parse() {
        let pattern: AlphanumericPattern = "[a-z]".parse().unwrap();
        assert_eq!(pattern.as_str(), "[a-z]");
        assert_eq!(pattern.to_string(), "[a-z]");
        assert_eq!(
            AlphanumericPattern::default().as_str(),
            DEFAULT_ALPHANUMERIC_PATTERN
        );
    }
}
