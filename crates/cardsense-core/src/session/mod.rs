//! Session domain module.
//!
//! This module contains the session state that the advisor use case
//! operates on.
//!
//! # Module Structure
//!
//! - `model`: Session state (`SessionState`)

mod model;

// Re-export public API
pub use model::SessionState;
