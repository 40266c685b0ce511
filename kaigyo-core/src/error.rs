//! Error types for filter configuration
//!
//! Processing text never fails; every variant here is raised while the
//! filter is being configured.

use thiserror::Error;

/// Error type for filter configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Alphanumeric pattern did not compile
    #[error("invalid alphanumeric pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The expression that was supplied
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration is well-formed but not usable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for filter configuration
pub type Result<T> = std::result::Result<T, Error>;
