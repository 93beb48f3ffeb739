//! Core domain layer for cardsense.
//!
//! Holds the questionnaire answer model, the closed persona set with its
//! rule-based classifier, the card-control settings record with per-persona
//! recommendation presets, and the session state those pieces hang off.
//! Everything here is pure, synchronous computation over in-memory values.

pub mod answers;
pub mod config;
pub mod error;
pub mod persona;
pub mod session;
pub mod settings;

// Re-export common error type
pub use error::{AdvisorError, Result};
