//! Persona domain module.
//!
//! This module contains the closed persona enumeration and the rule-based
//! classifier that assigns a persona to a set of questionnaire answers.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain model (`Persona`)
//! - `classifier`: Additive-scoring classifier (`classify`, `Classification`)

mod classifier;
mod model;

// Re-export public API
pub use classifier::{Classification, classify};
pub use model::Persona;
