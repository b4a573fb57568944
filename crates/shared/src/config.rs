//! Tender configuration management.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::MoneyResult;

/// Tender configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenderConfig {
    /// Number formatting and parsing.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Exchange rate lookup.
    #[serde(default)]
    pub forex: ForexConfig,
}

/// Locale configuration for the default localization collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Character separating the integer and fraction parts.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    /// Character grouping thousands.
    #[serde(default = "default_group_separator")]
    pub group_separator: char,
    /// Minor-unit precision overrides, keyed by currency code.
    #[serde(default)]
    pub precision_overrides: HashMap<String, u32>,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_group_separator() -> char {
    ','
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
            precision_overrides: HashMap::new(),
        }
    }
}

/// Forex configuration for the static and caching rate providers.
#[derive(Debug, Clone, Deserialize)]
pub struct ForexConfig {
    /// Currency used to triangulate pairs without a direct or inverse rate.
    #[serde(default)]
    pub pivot: Option<String>,
    /// Known rates (1 `from` = `rate` `to`).
    #[serde(default)]
    pub rates: Vec<RateConfig>,
    /// Maximum number of cached rate lookups.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live of a cached rate lookup, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    1_000
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

impl Default for ForexConfig {
    fn default() -> Self {
        Self {
            pivot: None,
            rates: Vec::new(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

/// A single configured exchange rate.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Exchange rate (1 `from` = `rate` `to`).
    pub rate: Decimal,
}

impl TenderConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TENDER__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> MoneyResult<Self> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TENDER").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml_str(toml: &str) -> MoneyResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
