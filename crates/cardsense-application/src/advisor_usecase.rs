//! Advisor use case implementation.
//!
//! `AdvisorUseCase` orchestrates one advisory session: it runs the
//! classifier over the collected answers, looks up the matching
//! recommendation preset, and manages the session's applied-settings
//! record. Every operation takes the `SessionState` explicitly; the use
//! case itself holds no state, so each call is an independent, idempotent,
//! synchronous step.

use cardsense_core::answers::AnswerSet;
use cardsense_core::error::{AdvisorError, Result};
use cardsense_core::persona::{Persona, classify};
use cardsense_core::session::SessionState;
use cardsense_core::settings::{CardSettings, recommend};
use serde::{Deserialize, Serialize};

/// A classification outcome paired with its recommended settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    /// The assigned persona
    pub persona: Persona,
    /// Human-readable reasons for the recognized signals
    pub reasons: Vec<String>,
    /// The recommended settings record for the persona
    pub settings: CardSettings,
}

/// Stateless use case driving one advisory session.
#[derive(Debug, Clone, Default)]
pub struct AdvisorUseCase;

impl AdvisorUseCase {
    /// Creates a new `AdvisorUseCase` instance.
    pub fn new() -> Self {
        Self
    }

    /// Classifies the session's answers and stores the resulting
    /// recommendation in the session.
    ///
    /// The recommendation is recomputed from scratch on every call; a
    /// previous outcome is fully replaced, never merged.
    pub fn classify_and_recommend(&self, state: &mut SessionState) -> Advice {
        let outcome = classify(&state.answers);
        let settings = recommend(outcome.persona);

        state.last_persona = Some(outcome.persona);
        state.last_reasons = outcome.reasons.clone();
        state.last_recommendation = Some(settings.clone());
        state.touch();

        tracing::info!(persona = %outcome.persona, "recommendation computed");

        Advice {
            persona: outcome.persona,
            reasons: outcome.reasons,
            settings,
        }
    }

    /// Returns the session's current recommendation for review.
    ///
    /// `None` means no recommendation has been computed yet; the caller
    /// renders that as an informational state, not an error.
    pub fn review(&self, state: &SessionState) -> Option<Advice> {
        let persona = state.last_persona?;
        let settings = state.last_recommendation.clone()?;
        Some(Advice {
            persona,
            reasons: state.last_reasons.clone(),
            settings,
        })
    }

    /// Overwrites the session's applied settings with the given record.
    ///
    /// This is always a full-field overwrite: all seven toggles, the limit,
    /// and the notifications flag come from `record`. Returns the record
    /// now in effect.
    pub fn apply(&self, state: &mut SessionState, record: CardSettings) -> CardSettings {
        state.applied = record;
        state.touch();
        tracing::info!(limit = state.applied.monthly_limit, "settings applied");
        state.applied.clone()
    }

    /// Applies the session's last recommendation verbatim.
    ///
    /// The whole record is copied, note included. Fails with
    /// [`AdvisorError::RecommendationMissing`] when the questionnaire has
    /// not produced a recommendation yet.
    pub fn quick_apply(&self, state: &mut SessionState) -> Result<CardSettings> {
        let record = state
            .last_recommendation
            .clone()
            .ok_or(AdvisorError::RecommendationMissing)?;
        Ok(self.apply(state, record))
    }

    /// Resets the applied settings to the factory default record.
    ///
    /// Returns the default record. The last recommendation, if any, is
    /// left untouched.
    pub fn reset_applied(&self, state: &mut SessionState) -> CardSettings {
        self.apply(state, CardSettings::factory_default())
    }

    /// Clears the collected answers and the last classification outcome.
    ///
    /// The applied settings survive: this only restarts the questionnaire
    /// flow, it does not touch the simulated card configuration.
    pub fn reset_session(&self, state: &mut SessionState) {
        state.answers = AnswerSet::new();
        state.last_persona = None;
        state.last_reasons = Vec::new();
        state.last_recommendation = None;
        state.touch();
        tracing::info!(session_id = %state.id, "session answers cleared");
    }

    /// Lists the personas a session can be assigned to, in tie-break order.
    pub fn personas(&self) -> Vec<Persona> {
        use strum::IntoEnumIterator;
        Persona::iter().collect()
    }
}
