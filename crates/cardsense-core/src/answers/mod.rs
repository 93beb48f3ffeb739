//! Questionnaire answer domain module.
//!
//! This module contains the answer set collected from the usage
//! questionnaire and the closed answer vocabularies.
//!
//! # Module Structure
//!
//! - `model`: Core answer domain models (`AnswerSet`, `TransactionMode`,
//!   `SpendLevel`, `EmiFrequency`)

mod model;

// Re-export public API
pub use model::{AnswerSet, EmiFrequency, SpendLevel, TransactionMode};
