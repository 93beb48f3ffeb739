//! Application layer for cardsense.
//!
//! Coordinates the domain pieces (classifier, presets, session state) into
//! the operations the front-end drives: classify-and-recommend, review,
//! apply, quick-apply, and the two reset flavors.

pub mod advisor_usecase;

// Re-export public API
pub use advisor_usecase::{Advice, AdvisorUseCase};
