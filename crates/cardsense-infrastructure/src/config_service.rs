//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from the configuration file
//! (~/.config/cardsense/config.toml).

use crate::paths::CardsensePaths;
use cardsense_core::config::AppConfig;
use cardsense_core::error::Result;
use std::path::PathBuf;

/// Configuration service that loads the application configuration.
///
/// A missing config file is not an error: the service falls back to
/// `AppConfig::default()`. A malformed file is logged and also falls back
/// to defaults, so a broken config never blocks startup.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    /// Creates a new ConfigService using the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: CardsensePaths::config_file()?,
        })
    }

    /// Creates a new ConfigService with a custom config path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Gets the application configuration, falling back to defaults.
    pub fn get_config(&self) -> AppConfig {
        match self.load_config() {
            Ok(Some(config)) => config,
            Ok(None) => AppConfig::default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.config_path.display(),
                    error = %e,
                    "failed to load config, using defaults"
                );
                AppConfig::default()
            }
        }
    }

    /// Loads the configuration file if it exists.
    fn load_config(&self) -> Result<Option<AppConfig>> {
        if !self.config_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.config_path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(Some(config))
    }
}
