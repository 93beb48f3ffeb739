//! Session state domain model.
//!
//! One `SessionState` holds everything a single advisory session mutates:
//! the collected answers, the last classification outcome, and the applied
//! settings record. It is an explicit state object passed into each
//! operation (no ambient globals) and it lives only as long as the
//! process.

use crate::answers::AnswerSet;
use crate::persona::Persona;
use crate::settings::CardSettings;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full mutable state of one advisory session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
    /// Questionnaire answers collected so far
    pub answers: AnswerSet,
    /// Persona from the most recent classification
    pub last_persona: Option<Persona>,
    /// Reasons from the most recent classification
    #[serde(default)]
    pub last_reasons: Vec<String>,
    /// Settings record recommended by the most recent classification
    pub last_recommendation: Option<CardSettings>,
    /// The simulated applied settings for this session
    pub applied: CardSettings,
}

impl SessionState {
    /// Creates a fresh session with empty answers and factory-default
    /// applied settings.
    pub fn new() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now.clone(),
            updated_at: now,
            answers: AnswerSet::new(),
            last_persona: None,
            last_reasons: Vec::new(),
            last_recommendation: None,
            applied: CardSettings::factory_default(),
        }
    }

    /// Marks the session as updated now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Whether a recommendation has been computed in this session.
    pub fn has_recommendation(&self) -> bool {
        self.last_recommendation.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_clean() {
        let state = SessionState::new();
        assert!(!state.id.is_empty());
        assert_eq!(state.answers, AnswerSet::new());
        assert!(state.last_persona.is_none());
        assert!(state.last_reasons.is_empty());
        assert!(!state.has_recommendation());
        assert_eq!(state.applied, CardSettings::factory_default());
    }

    #[test]
    fn test_sessions_get_unique_ids() {
        let a = SessionState::new();
        let b = SessionState::new();
        assert_ne!(a.id, b.id);
    }
}
