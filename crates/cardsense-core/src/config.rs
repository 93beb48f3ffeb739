//! Application configuration structures.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has
//! a default so a missing file (or missing key) never blocks startup.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log level filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            currency_symbol: default_currency_symbol(),
        }
    }
}
