//! Filter configuration
//!
//! The same settings the fluent setters on [`NewlineFilter`] expose, as a
//! TOML document:
//!
//! ```toml
//! [separators]
//! narrow_chars = false
//! narrow_alpha = true
//! narrow_digit = false
//! narrow_symbol = false
//! wide_alpha = false
//! wide_digit = false
//!
//! [alphanumeric]
//! pattern = '[0-9０-９\p{Latin}\p{Greek}\p{Cyrillic}]'
//! ```
//!
//! Every key is optional.

use crate::alphanumeric::AlphanumericPattern;
use crate::error::{Error, Result};
use crate::joiner::NewlineFilter;
use crate::separator::SeparatorPreset;
use serde::{Deserialize, Serialize};

/// Embedded default configuration
pub const DEFAULT_CONFIG: &str = include_str!("../configs/default.toml");

/// Root filter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub separators: Separators,
    #[serde(default)]
    pub alphanumeric: Alphanumeric,
}

/// Preset toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Separators {
    pub narrow_chars: bool,
    pub narrow_alpha: bool,
    pub narrow_digit: bool,
    pub narrow_symbol: bool,
    pub wide_alpha: bool,
    pub wide_digit: bool,
}

impl Separators {
    /// Toggle state for a preset
    pub fn get(&self, preset: SeparatorPreset) -> bool {
        match preset {
            SeparatorPreset::NarrowChars => self.narrow_chars,
            SeparatorPreset::NarrowAlpha => self.narrow_alpha,
            SeparatorPreset::NarrowDigit => self.narrow_digit,
            SeparatorPreset::NarrowSymbol => self.narrow_symbol,
            SeparatorPreset::WideAlpha => self.wide_alpha,
            SeparatorPreset::WideDigit => self.wide_digit,
        }
    }

    /// Set the toggle state for a preset
    pub fn set(&mut self, preset: SeparatorPreset, enabled: bool) {
        let slot = match preset {
            SeparatorPreset::NarrowChars => &mut self.narrow_chars,
            SeparatorPreset::NarrowAlpha => &mut self.narrow_alpha,
            SeparatorPreset::NarrowDigit => &mut self.narrow_digit,
            SeparatorPreset::NarrowSymbol => &mut self.narrow_symbol,
            SeparatorPreset::WideAlpha => &mut self.wide_alpha,
            SeparatorPreset::WideDigit => &mut self.wide_digit,
        };
        *slot = enabled;
    }
}

/// Alphanumeric pattern override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Alphanumeric {
    /// Replacement expression; `None` keeps the built-in pattern
    pub pattern: Option<String>,
}

impl FilterConfig {
    /// Create a configuration builder
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: FilterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the embedded default configuration
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.alphanumeric.pattern {
            if pattern.trim().is_empty() {
                return Err(Error::Configuration(
                    "alphanumeric pattern must not be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Build a filter from this configuration
    pub fn to_filter(&self) -> Result<NewlineFilter> {
        NewlineFilter::from_config(self)
    }
}

impl NewlineFilter {
    /// Create a filter from a configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        config.validate()?;

        let mut filter = NewlineFilter::new();
        for preset in SeparatorPreset::ALL {
            if config.separators.get(preset) {
                filter.set_separator_preset(preset, true);
            }
        }
        if let Some(pattern) = &config.alphanumeric.pattern {
            filter.set_alphanumeric_pattern(AlphanumericPattern::new(pattern.as_str())?);
        }

        Ok(filter)
    }
}

/// Fluent builder for filter configuration
#[derive(Debug, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a separator preset
    pub fn separator(mut self, preset: SeparatorPreset, enabled: bool) -> Self {
        self.config.separators.set(preset, enabled);
        self
    }

    /// Keep line breaks adjacent to any narrow character
    pub fn narrow_chars_separated(self, enabled: bool) -> Self {
        self.separator(SeparatorPreset::NarrowChars, enabled)
    }

    /// Keep line breaks adjacent to ASCII letters
    pub fn narrow_alpha_separated(self, enabled: bool) -> Self {
        self.separator(SeparatorPreset::NarrowAlpha, enabled)
    }

    /// Keep line breaks adjacent to ASCII digits
    pub fn narrow_digit_separated(self, enabled: bool) -> Self {
        self.separator(SeparatorPreset::NarrowDigit, enabled)
    }

    /// Keep line breaks adjacent to ASCII punctuation and symbols
    pub fn narrow_symbol_separated(self, enabled: bool) -> Self {
        self.separator(SeparatorPreset::NarrowSymbol, enabled)
    }

    /// Keep line breaks adjacent to wide Latin, Greek or Cyrillic letters
    pub fn wide_alpha_separated(self, enabled: bool) -> Self {
        self.separator(SeparatorPreset::WideAlpha, enabled)
    }

    /// Keep line breaks adjacent to fullwidth digits
    pub fn wide_digit_separated(self, enabled: bool) -> Self {
        self.separator(SeparatorPreset::WideDigit, enabled)
    }

    /// Replace the alphanumeric pattern
    pub fn alphanumeric_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.alphanumeric.pattern = Some(pattern.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FilterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
