//! # Storefront Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! ## Environment Variables
//! | Variable                    | Default           |
//! |-----------------------------|-------------------|
//! | `LUXSITE_STORE_NAME`        | `LuxSiteMarket`   |
//! | `LUXSITE_CATALOG_PATH`      | built-in sample   |
//! | `LUXSITE_CURRENCY_SYMBOL`   | `$`               |
//! | `LUXSITE_CURRENCY_DECIMALS` | `2`               |
//!
//! Configuration is read-only after startup.

use std::env;
use std::path::PathBuf;

use luxsite_core::money::group_thousands;
use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Shown in the header and footer.
    pub store_name: String,

    /// JSON catalog file. `None` uses the built-in demo listings.
    pub catalog_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "LuxSiteMarket".to_string(),
            catalog_path: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StorefrontConfig::default();

        if let Some(store_name) = lookup("LUXSITE_STORE_NAME") {
            config.store_name = store_name;
        }

        config.catalog_path = lookup("LUXSITE_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(symbol) = lookup("LUXSITE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("LUXSITE_CURRENCY_DECIMALS") {
            config.currency_decimals = decimals
                .trim()
                .parse()
                .ok()
                .filter(|d| *d <= 4)
                .ok_or_else(|| ConfigError::InvalidValue("LUXSITE_CURRENCY_DECIMALS".to_string()))?;
        }

        Ok(config)
    }

    /// Formats a cent amount as a currency string with thousands grouping.
    ///
    /// ## Example
    /// ```rust
    /// use luxsite_storefront::config::StorefrontConfig;
    ///
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(2_500_000), "$25,000.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_u64.pow(u32::from(self.currency_decimals));
        let abs = cents.unsigned_abs();
        let whole = group_thousands(abs / divisor);
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole,
                abs % divisor,
                width = usize::from(self.currency_decimals)
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
