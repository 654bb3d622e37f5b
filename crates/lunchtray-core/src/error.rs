//! Error types for Lunch Tray.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Tax rate outside of [0, 1].
    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(String),
}

/// A route name that is not one of the known screens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown screen route: {0}")]
pub struct RouteParseError(pub String);
