//! Character width classification
//!
//! "Narrow" here is a storage proxy: a character is narrow when its UTF-8
//! encoding is a single byte, which is exactly the ASCII range. This is not
//! the Unicode East Asian Width property; halfwidth katakana, for instance,
//! classify as wide.

/// Width class of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// Single-byte character (ASCII range)
    Narrow,
    /// Multi-byte character (CJK, fullwidth forms, accented Latin, ...)
    Wide,
}

impl CharWidth {
    /// Classify a character
    #[inline]
    pub fn of(ch: char) -> Self {
        if ch.len_utf8() == 1 {
            CharWidth::Narrow
        } else {
            CharWidth::Wide
        }
    }
}

/// Check whether a boundary side is narrow
///
/// A missing character (start or end of text, or an empty line) counts as
/// narrow: there is nothing wide there.
#[inline]
pub fn is_narrow(ch: Option<char>) -> bool {
    ch.map_or(true, |c| CharWidth::of(c) == CharWidth::Narrow)
}

/// Check whether a boundary side holds a wide character
#[inline]
pub fn is_wide(ch: Option<char>) -> bool {
    !is_narrow(ch)
}
