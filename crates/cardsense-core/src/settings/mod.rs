//! Card-control settings domain module.
//!
//! This module contains the card-control settings record and the
//! per-persona recommendation presets.
//!
//! # Module Structure
//!
//! - `model`: Settings record (`CardSettings`)
//! - `preset`: Per-persona recommendation table (`recommend`,
//!   `recommend_for_label`)

mod model;
mod preset;

// Re-export public API
pub use model::CardSettings;
pub use preset::{recommend, recommend_for_label};
