//! Line joiner
//!
//! [`NewlineFilter`] is the entry point: configure it once, then run rendered
//! inline text through [`NewlineFilter::process`]. It is meant to sit after a
//! Markdown renderer as a plain post-processing stage.

use crate::alphanumeric::AlphanumericPattern;
use crate::decision::{BoundaryDecision, BoundaryRules};
use crate::separator::{SeparatorPredicate, SeparatorPreset};

/// Removes line breaks that would render as unintended whitespace next to
/// wide characters
///
/// # Example
///
/// ```rust
/// use kaigyo_core::NewlineFilter;
///
/// let filter = NewlineFilter::new();
/// assert_eq!(filter.process("Parsedownは\nとても\n便利"), "Parsedownはとても便利");
/// assert_eq!(filter.process("Hello\nWorld"), "Hello\nWorld");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewlineFilter {
    rules: BoundaryRules,
}

impl NewlineFilter {
    /// Filter with no separator presets and the default alphanumeric pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter using the given rules
    pub fn with_rules(rules: BoundaryRules) -> Self {
        Self { rules }
    }

    /// Decision rules in use
    pub fn rules(&self) -> &BoundaryRules {
        &self.rules
    }

    /// Rejoin `text`, keeping only the line breaks the rules ask for
    ///
    /// Each boundary is decided once from the last character of the line
    /// before it and the first character of the line after it. Line contents
    /// are copied unchanged.
    pub fn process(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut lines = text.split('\n').peekable();
        let mut index = 0usize;

        while let Some(line) = lines.next() {
            output.push_str(line);

            let Some(next_line) = lines.peek() else {
                break;
            };
            let prev = line.chars().next_back();
            let next = next_line.chars().next();
            let decision = self.rules.decide(prev, next);
            log::trace!("boundary {index}: {prev:?} / {next:?} -> {decision:?}");

            if decision.is_keep() {
                output.push('\n');
            }
            index += 1;
        }

        output
    }

    /// Decide a single boundary
    pub fn decide(&self, prev: Option<char>, next: Option<char>) -> BoundaryDecision {
        self.rules.decide(prev, next)
    }

    /// Whether the line break between `prev` and `next` is kept
    pub fn keep_boundary(&self, prev: Option<char>, next: Option<char>) -> bool {
        self.rules.keep_boundary(prev, next)
    }

    /// Keep line breaks adjacent to any narrow character
    ///
    /// Useful when the source follows a "always space between wide and
    /// narrow text" convention.
    pub fn set_narrow_chars_separated(&mut self, enabled: bool) -> &mut Self {
        self.set_separator_preset(SeparatorPreset::NarrowChars, enabled)
    }

    /// Keep line breaks adjacent to ASCII letters
    pub fn set_narrow_alpha_separated(&mut self, enabled: bool) -> &mut Self {
        self.set_separator_preset(SeparatorPreset::NarrowAlpha, enabled)
    }

    /// Keep line breaks adjacent to ASCII digits
    pub fn set_narrow_digit_separated(&mut self, enabled: bool) -> &mut Self {
        self.set_separator_preset(SeparatorPreset::NarrowDigit, enabled)
    }

    /// Keep line breaks adjacent to ASCII punctuation and symbols
    pub fn set_narrow_symbol_separated(&mut self, enabled: bool) -> &mut Self {
        self.set_separator_preset(SeparatorPreset::NarrowSymbol, enabled)
    }

    /// Keep line breaks adjacent to wide Latin, Greek or Cyrillic letters
    pub fn set_wide_alpha_separated(&mut self, enabled: bool) -> &mut Self {
        self.set_separator_preset(SeparatorPreset::WideAlpha, enabled)
    }

    /// Keep line breaks adjacent to fullwidth digits
    pub fn set_wide_digit_separated(&mut self, enabled: bool) -> &mut Self {
        self.set_separator_preset(SeparatorPreset::WideDigit, enabled)
    }

    /// Install or remove a built-in preset
    pub fn set_separator_preset(&mut self, preset: SeparatorPreset, enabled: bool) -> &mut Self {
        log::debug!("separator preset {preset} {}", if enabled { "enabled" } else { "disabled" });
        self.rules.set_preset(preset, enabled);
        self
    }

    /// Check whether a built-in preset is installed
    pub fn is_separator_enabled(&self, preset: SeparatorPreset) -> bool {
        self.rules.is_preset_enabled(preset)
    }

    /// Register a custom separator predicate under `key`
    pub fn register_separator<P>(&mut self, key: impl Into<String>, predicate: P) -> &mut Self
    where
        P: SeparatorPredicate + 'static,
    {
        self.rules.register_separator(key, predicate);
        self
    }

    /// Remove the separator registered under `key`, if any
    pub fn unregister_separator(&mut self, key: &str) -> &mut Self {
        self.rules.unregister_separator(key);
        self
    }

    /// Active alphanumeric pattern
    pub fn alphanumeric_pattern(&self) -> &AlphanumericPattern {
        self.rules.alphanumeric_pattern()
    }

    /// Replace the alphanumeric pattern
    pub fn set_alphanumeric_pattern(&mut self, pattern: AlphanumericPattern) -> &mut Self {
        self.rules.set_alphanumeric_pattern(pattern);
        self
    }
}
