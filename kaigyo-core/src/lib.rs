//! Newline-boundary filter for Japanese inline text
//!
//! Browsers render a line break inside a paragraph as a space. In Japanese
//! text that space is unwanted, so this crate removes line breaks that sit
//! next to wide characters while keeping the ones that separate words.
//!
//! # Rules
//!
//! For every line break, looking only at the last character before it and the
//! first character after it:
//!
//! 1. both narrow: keep
//! 2. both alphanumeric, of any width: keep
//! 3. either side matched by a registered separator: keep
//! 4. otherwise: drop, joining the lines directly
//!
//! # Example
//!
//! ```rust
//! use kaigyo_core::NewlineFilter;
//!
//! let mut filter = NewlineFilter::new();
//! filter.set_wide_alpha_separated(true);
//!
//! let text = "全角ＡＢＣ\n全角\n１２３";
//! assert_eq!(filter.process(text), "全角ＡＢＣ\n全角１２３");
//! ```
//!
//! The filter is a post-processing stage: run the renderer first, then pass
//! its inline output through [`NewlineFilter::process`].

pub mod alphanumeric;
pub mod config;
pub mod decision;
pub mod error;
pub mod joiner;
pub mod separator;
pub mod width;

pub use alphanumeric::{AlphanumericPattern, DEFAULT_ALPHANUMERIC_PATTERN};
pub use config::{FilterConfig, FilterConfigBuilder};
pub use decision::{BoundaryDecision, BoundaryRules, KeepReason};
pub use error::{Error, Result};
pub use joiner::NewlineFilter;
pub use separator::{SeparatorPredicate, SeparatorPreset, SeparatorRegistry};
pub use width::{is_narrow, is_wide, CharWidth};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_filter_is_shareable() {
        assert_send_sync::<NewlineFilter>();
        assert_send_sync::<BoundaryRules>();
        assert_send_sync::<SeparatorRegistry>();
    }
}
