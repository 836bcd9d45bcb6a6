//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. Environment variables override the data locations:
//!
//! - `TOKENBOARD_PRICES_URL` - price feed URL
//! - `TOKENBOARD_BALANCES` - balance file path
//!
//! # Example
//!
//! ```no_run
//! use tokenboard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("tokenboard.toml")?;
//!     config.logging.init_with_level(None);
//!     let tiers = config.chain_tiers()?;
//!     assert!(!tiers.is_empty());
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::logging::LoggingConfig;
use crate::domain::{default_tier_table, ChainTiers};
use crate::error::{ConfigError, Result};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tokenboard.toml";

/// Public price feed used when nothing else is configured.
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

const PRICES_URL_ENV: &str = "TOKENBOARD_PRICES_URL";
const BALANCES_ENV: &str = "TOKENBOARD_BALANCES";

/// Price feed location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricesConfig {
    /// HTTP(S) URL of the JSON price feed.
    pub url: String,

    /// Local JSON feed file. Takes precedence over `url` when set.
    pub file: Option<PathBuf>,

    /// Request timeout for the HTTP feed, in seconds.
    pub timeout_secs: u64,
}

impl Default for PricesConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PRICES_URL.to_string(),
            file: None,
            timeout_secs: 10,
        }
    }
}

/// Balance file location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BalancesConfig {
    /// JSON file holding an array of balance rows.
    pub path: PathBuf,
}

impl Default for BalancesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("balances.json"),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`], or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Price feed settings.
    #[serde(default)]
    pub prices: PricesConfig,

    /// Balance source settings.
    #[serde(default)]
    pub balances: BalancesConfig,

    /// Chain ranking tiers, chain name → priority (higher ranks first).
    ///
    /// Defaults to the stock table when the section is omitted.
    #[serde(default = "default_tiers")]
    pub tiers: BTreeMap<String, i32>,
}

fn default_tiers() -> BTreeMap<String, i32> {
    default_tier_table()
        .into_iter()
        .map(|(chain, value)| (chain.to_string(), value))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            prices: PricesConfig::default(),
            balances: BalancesConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    ///
    /// Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        debug!(path = %path.display(), "Config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(PRICES_URL_ENV) {
            self.prices.url = url;
        }
        if let Ok(path) = std::env::var(BALANCES_ENV) {
            self.balances.path = PathBuf::from(path);
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if !LoggingConfig::is_known_format(&self.logging.format) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("unknown format '{}', expected pretty or json", self.logging.format),
            }
            .into());
        }
        if self.prices.file.is_none() && self.prices.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "prices.url",
            }
            .into());
        }
        if self.prices.file.is_none() {
            if let Err(err) = Url::parse(&self.prices.url) {
                return Err(ConfigError::InvalidValue {
                    field: "prices.url",
                    reason: err.to_string(),
                }
                .into());
            }
        }
        if self.prices.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "prices.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.tiers.is_empty() {
            return Err(ConfigError::MissingField { field: "tiers" }.into());
        }
        if let Err(err) = self.build_tiers() {
            return Err(ConfigError::InvalidValue {
                field: "tiers",
                reason: err.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn build_tiers(&self) -> std::result::Result<ChainTiers, crate::domain::error::DomainError> {
        ChainTiers::try_new(self.tiers.iter().map(|(chain, value)| (chain.as_str(), *value)))
    }

    /// The immutable chain tier table described by `[tiers]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a tier value leaves no room for the unknown-chain
    /// sentinel (already rejected by validation for loaded configs).
    pub fn chain_tiers(&self) -> Result<ChainTiers> {
        Ok(self.build_tiers()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.prices.url, DEFAULT_PRICES_URL);
        assert_eq!(config.prices.timeout_secs, 10);
        assert_eq!(config.balances.path, PathBuf::from("balances.json"));
        assert_eq!(config.tiers.get("Osmosis"), Some(&100));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn custom_tiers_replace_defaults() {
        let config = Config::parse_toml(
            r#"
[tiers]
Solana = 70
Osmosis = -5
"#,
        )
        .unwrap();
        let tiers = config.chain_tiers().unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers.get("Solana"), Some(Priority::new(70)));
        assert!(!tiers.is_known("Ethereum"));
        assert_eq!(tiers.unknown(), Priority::new(-99));
    }

    #[test]
    fn rejects_empty_tier_table() {
        let result = Config::parse_toml("[tiers]\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "tiers" }))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = Config::parse_toml("[prices]\ntimeout_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "prices.timeout_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unparseable_url() {
        let result = Config::parse_toml("[prices]\nurl = \"not a url\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "prices.url",
                ..
            }))
        ));
    }

    #[test]
    fn unparseable_url_is_ignored_when_file_is_set() {
        let config =
            Config::parse_toml("[prices]\nurl = \"not a url\"\nfile = \"prices.json\"\n").unwrap();
        assert_eq!(config.prices.url, "not a url");
    }

    #[test]
    fn file_source_allows_empty_url() {
        let config = Config::parse_toml("[prices]\nurl = \"\"\nfile = \"prices.json\"\n").unwrap();
        assert_eq!(config.prices.file, Some(PathBuf::from("prices.json")));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }
}
