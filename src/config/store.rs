//! Store configuration loading from store.toml
//!
//! The file names the active branch, the trend thresholds, the mock-history settings
//! and optionally a seed catalog. Every section has defaults, so an empty file (or no
//! file at all) yields the built-in Tel Aviv set-up.

use crate::{
    core::trend::TrendThresholds,
    entities::Product,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default configuration path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "store.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "STORE_CONFIG";

/// Configuration structure representing the entire store.toml file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Branch shown in the views
    pub branch: String,
    /// Trend classification thresholds
    pub trend: TrendThresholds,
    /// Mock history settings
    pub seed: SeedConfig,
    /// Seed catalog; empty means the built-in one
    pub products: Vec<Product>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            branch: "Tel Aviv - Main".to_string(),
            trend: TrendThresholds::default(),
            seed: SeedConfig::default(),
            products: Vec::new(),
        }
    }
}

/// Settings for the synthetic sales history generated at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// RNG seed; the same seed always produces the same history
    pub rng_seed: u64,
    /// How many days back the history reaches (today is always included)
    pub history_days: u32,
    /// Product whose sales jump in the last seven days
    pub spike_product_id: i64,
    /// Product whose sales drop in the last seven days
    pub dip_product_id: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            history_days: 21,
            spike_product_id: 3,
            dip_product_id: 2,
        }
    }
}

/// Loads store configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    debug!("Loading store configuration from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Parses store configuration from TOML text
///
/// # Errors
/// Returns an error if the TOML is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse store config: {e}"),
    })
}

/// Path of the configuration file: `STORE_CONFIG` if set, `store.toml` otherwise.
///
/// # Errors
/// Returns [`Error::EnvVar`] if `STORE_CONFIG` is set but not valid unicode.
pub fn config_path() -> Result<String> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => Ok(path),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_CONFIG_PATH.to_string()),
        Err(e) => Err(Error::EnvVar(e)),
    }
}

/// Loads the configuration at `path`, or the defaults if no file exists there.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if path.exists() {
        let config = load_config(path)?;
        info!("Loaded store configuration from {}", path.display());
        Ok(config)
    } else {
        info!("No configuration at {}, using built-in defaults", path.display());
        Ok(AppConfig::default())
    }
}

/// Loads the application configuration from [`config_path`].
///
/// A missing file falls back to the defaults; a file that exists but cannot be parsed
/// is an error.
///
/// # Errors
/// Returns an error if `STORE_CONFIG` is not valid unicode, or if the configuration
/// file exists but cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    load_config_or_default(config_path()?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.branch, "Tel Aviv - Main");
        assert_eq!(config.trend, TrendThresholds::default());
        assert_eq!(config.seed, SeedConfig::default());
        assert!(config.products.is_empty());
    }

    #[test]
    fn test_parse_store_config() {
        let toml_str = r#"
            branch = "Haifa - Port"

            [trend]
            hot = 40.0

            [seed]
            rng_seed = 7
            spike_product_id = 1

            [[products]]
            id = 1
            sku = "HUM-1"
            barcode = "7290000101"
            name = "Hummus"
            category = "Salads"
            department = "Fresh"
            supplier = "Sabra"
            stock = 40
            physical_stock = 38
            price = 8.9
            min_stock = 10
            expiry = "2026-04-01"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.branch, "Haifa - Port");
        assert_eq!(config.trend.hot, 40.0);
        assert_eq!(config.trend.rising, 15.0);
        assert_eq!(config.seed.rng_seed, 7);
        assert_eq!(config.seed.history_days, 21);
        assert_eq!(config.seed.spike_product_id, 1);
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].physical_stock, 38);
        assert_eq!(
            config.products[0].expiry,
            chrono::NaiveDate::from_ymd_opt(2026, 4, 1)
        );
    }

    #[test]
    fn test_invalid_config_is_error() {
        let result = parse_config("branch = 12");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_config("definitely/not/here/store.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_or_default("definitely/not/here/store.toml").unwrap();
        assert_eq!(config.branch, "Tel Aviv - Main");
        assert_eq!(config.seed, SeedConfig::default());
        assert!(config.products.is_empty());
    }
}
