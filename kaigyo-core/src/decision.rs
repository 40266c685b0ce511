//! Boundary decision rules
//!
//! A boundary is kept when, in order:
//!
//! 1. both sides are narrow,
//! 2. both sides are alphanumeric (of any width),
//! 3. either side is accepted by a registered separator.
//!
//! Everything else sits next to a wide character and is dropped.

use crate::alphanumeric::AlphanumericPattern;
use crate::separator::{SeparatorPredicate, SeparatorPreset, SeparatorRegistry};
use crate::width::is_narrow;

/// Rule that caused a boundary to be kept
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeepReason {
    /// Both sides are narrow (or missing)
    BothNarrow,
    /// Both sides are alphanumeric
    AlphanumericContinuity,
    /// A separator accepted at least one side
    Separator,
}

/// Decision about a single boundary
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoundaryDecision {
    /// Keep the line break
    Keep(KeepReason),
    /// Join the two lines directly
    Drop,
}

impl BoundaryDecision {
    /// Whether the line break survives
    #[inline]
    pub fn is_keep(self) -> bool {
        matches!(self, BoundaryDecision::Keep(_))
    }
}

/// Decision rules: separator registry plus alphanumeric pattern
#[derive(Debug, Clone, Default)]
pub struct BoundaryRules {
    separators: SeparatorRegistry,
    alphanumeric: AlphanumericPattern,
}

impl BoundaryRules {
    /// Rules with no separators and the default alphanumeric pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide a boundary from the last character before it and the first after it
    pub fn decide(&self, prev: Option<char>, next: Option<char>) -> BoundaryDecision {
        if is_narrow(prev) && is_narrow(next) {
            return BoundaryDecision::Keep(KeepReason::BothNarrow);
        }

        if self.alphanumeric.is_alphanumeric(prev) && self.alphanumeric.is_alphanumeric(next) {
            return BoundaryDecision::Keep(KeepReason::AlphanumericContinuity);
        }

        if self.separators.any_matches(prev) || self.separators.any_matches(next) {
            return BoundaryDecision::Keep(KeepReason::Separator);
        }

        BoundaryDecision::Drop
    }

    /// Whether the line break between `prev` and `next` is kept
    #[inline]
    pub fn keep_boundary(&self, prev: Option<char>, next: Option<char>) -> bool {
        self.decide(prev, next).is_keep()
    }

    /// Check whether a character is alphanumeric under the active pattern
    pub fn is_alphanumeric(&self, ch: Option<char>) -> bool {
        self.alphanumeric.is_alphanumeric(ch)
    }

    /// Active alphanumeric pattern
    pub fn alphanumeric_pattern(&self) -> &AlphanumericPattern {
        &self.alphanumeric
    }

    /// Replace the alphanumeric pattern
    pub fn set_alphanumeric_pattern(&mut self, pattern: AlphanumericPattern) {
        log::debug!("alphanumeric pattern set to '{pattern}'");
        self.alphanumeric = pattern;
    }

    /// Registered separators
    pub fn separators(&self) -> &SeparatorRegistry {
        &self.separators
    }

    /// Install or remove a built-in preset
    pub fn set_preset(&mut self, preset: SeparatorPreset, enabled: bool) {
        self.separators.set_preset(preset, enabled);
    }

    /// Check whether a built-in preset is installed
    pub fn is_preset_enabled(&self, preset: SeparatorPreset) -> bool {
        self.separators.contains(preset.key())
    }

    /// Register a custom separator
    pub fn register_separator<P>(&mut self, key: impl Into<String>, predicate: P)
    where
        P: SeparatorPredicate + 'static,
    {
        self.separators.register(key, predicate);
    }

    /// Remove a separator by key
    pub fn unregister_separator(&mut self, key: &str) {
        self.separators.unregister(key);
    }
}
