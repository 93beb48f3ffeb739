//! Infrastructure layer for cardsense.
//!
//! File-system concerns only: config-file path resolution and loading.
//! Session state is never persisted: every advisory session is ephemeral.

pub mod config_service;
pub mod paths;

// Re-export public API
pub use config_service::ConfigService;
pub use paths::CardsensePaths;
