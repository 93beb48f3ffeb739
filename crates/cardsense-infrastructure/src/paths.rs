//! Unified path management for cardsense configuration files.
//!
//! All configuration lives under the platform config directory
//! (`~/.config/cardsense` on Linux/macOS). Path resolution is centralized
//! here so every caller agrees on the layout.

use cardsense_core::error::{AdvisorError, Result};
use std::path::PathBuf;

/// Unified path management for cardsense.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/cardsense/         # Config directory
/// └── config.toml              # Application configuration
/// ```
pub struct CardsensePaths;

impl CardsensePaths {
    /// Returns the cardsense configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("cardsense"))
            .ok_or_else(|| AdvisorError::config("Cannot find config directory"))
    }

    /// Returns the path of the application configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
