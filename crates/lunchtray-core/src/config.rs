//! Configuration types.
//!
//! Configuration lives in an optional `config.toml`. Every field has a
//! default, so a missing file is the same as an empty one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::order::TaxRate;
use crate::screen::FlowPolicy;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tax and price display settings
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Screen flow settings
    #[serde(default)]
    pub flow: FlowPolicy,
}

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax as a fraction of the item total, e.g. "0.08"
    #[serde(default)]
    pub tax_rate: TaxRate,

    /// Prefix for price labels
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::DEFAULT,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&text)
    }

    /// Load configuration from the default location.
    ///
    /// Returns the defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::debug!("No config at {} - using defaults", path.display());
            return Ok(Self::default());
        }
        tracing::info!("Loading config from: {}", path.display());
        Self::load_from(&path)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lunchtray"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pricing.tax_rate, TaxRate::DEFAULT);
        assert_eq!(config.pricing.currency_symbol, "$");
        assert!(!config.flow.include_accompaniment);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[pricing]
tax_rate = "0.10"
currency_symbol = "€"

[flow]
include_accompaniment = true
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.pricing.tax_rate.value(), Decimal::new(10, 2));
        assert_eq!(config.pricing.currency_symbol, "€");
        assert!(config.flow.include_accompaniment);
    }

    #[test]
    fn test_rejects_out_of_range_tax_rate() {
        let err = AppConfig::from_toml("[pricing]\ntax_rate = \"1.5\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid tax rate"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
