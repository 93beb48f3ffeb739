//! Rule-based persona classifier.
//!
//! Additive scoring over the closed persona set: each recognized answer
//! signal bumps one or more persona scores, the highest total wins.
//! There is no normalization and no probability semantics.

use super::model::Persona;
use crate::answers::{AnswerSet, EmiFrequency, SpendLevel, TransactionMode};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The outcome of one classification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The winning persona
    pub persona: Persona,
    /// Human-readable reasons for the recognized signals, in rule order
    pub reasons: Vec<String>,
}

/// Per-persona score accumulator for a single classification pass.
///
/// Scores start at zero and are only ever incremented. The vector is
/// discarded once the top persona has been taken.
struct ScoreVector {
    scores: [u32; Persona::COUNT],
}

impl ScoreVector {
    fn new() -> Self {
        Self {
            scores: [0; Persona::COUNT],
        }
    }

    fn bump(&mut self, persona: Persona, delta: u32) {
        self.scores[persona as usize] += delta;
    }

    /// Returns the highest-scoring persona.
    ///
    /// Ties break by declaration order (first declared wins), so an
    /// all-zero vector resolves to `FrequentTraveler`.
    fn top(&self) -> Persona {
        let mut best = Persona::FrequentTraveler;
        for persona in Persona::iter() {
            if self.scores[persona as usize] > self.scores[best as usize] {
                best = persona;
            }
        }
        best
    }
}

/// Classifies an answer set into a persona with supporting reasons.
///
/// Pure function of the answer set: absent fields contribute nothing, and
/// no input can make classification fail. An answer set with no recognized
/// signals resolves to `Persona::FrequentTraveler` with an empty reasons
/// list (tie-break over an all-zero score vector).
///
/// # Examples
///
/// ```
/// use cardsense_core::answers::AnswerSet;
/// use cardsense_core::persona::{Persona, classify};
///
/// let answers = AnswerSet {
///     travels_internationally: Some(true),
///     ..AnswerSet::default()
/// };
/// let outcome = classify(&answers);
/// assert_eq!(outcome.persona, Persona::FrequentTraveler);
/// assert_eq!(outcome.reasons, vec!["Travels internationally"]);
/// ```
pub fn classify(answers: &AnswerSet) -> Classification {
    let mut scores = ScoreVector::new();
    let mut reasons: Vec<&str> = Vec::new();

    // Travel behavior
    if answers.travels_internationally == Some(true) {
        scores.bump(Persona::FrequentTraveler, 2);
        scores.bump(Persona::HighSpender, 1);
        reasons.push("Travels internationally");
    }

    // Shopping & subscriptions
    match answers.online_spend {
        Some(SpendLevel::High) => {
            scores.bump(Persona::OnlineShopper, 2);
            scores.bump(Persona::HighSpender, 1);
            reasons.push("High online spend");
        }
        Some(SpendLevel::Medium) => {
            scores.bump(Persona::OnlineShopper, 1);
            reasons.push("Moderate online spend");
        }
        _ => {}
    }

    // NFC / contactless preference
    if answers.prefers_contactless == Some(true) {
        scores.bump(Persona::HighSpender, 1);
        scores.bump(Persona::FrequentTraveler, 1);
        reasons.push("Uses contactless frequently");
    }

    // EMI preference
    if answers.uses_emi == Some(EmiFrequency::Often) {
        scores.bump(Persona::HighSpender, 2);
        scores.bump(Persona::OnlineShopper, 1);
        reasons.push("Often converts to EMI");
    }

    // Security preference
    if answers.security_first == Some(true) {
        scores.bump(Persona::SecurityConscious, 2);
        reasons.push("Prioritizes security over convenience");
    }

    // Credit familiarity: an explicit "No" leans minimal-user, a skipped
    // question stays neutral
    match answers.new_to_credit {
        Some(true) => {
            scores.bump(Persona::NewToCredit, 2);
            reasons.push("New to credit / thin file");
        }
        Some(false) => {
            scores.bump(Persona::MinimalUser, 1);
        }
        None => {}
    }

    // Monthly spend bands
    if let Some(monthly) = answers.monthly_spend {
        if monthly >= 100_000 {
            scores.bump(Persona::HighSpender, 3);
            reasons.push("Monthly spend very high");
        } else if monthly >= 30_000 {
            scores.bump(Persona::HighSpender, 1);
        } else if monthly <= 5_000 {
            scores.bump(Persona::MinimalUser, 2);
            reasons.push("Low monthly spend");
        }
    }

    // Preferred transaction mode
    match answers.preferred_mode {
        Some(TransactionMode::InStore) => scores.bump(Persona::FrequentTraveler, 1),
        Some(TransactionMode::Online) => scores.bump(Persona::OnlineShopper, 2),
        Some(TransactionMode::MostlyEmi) => scores.bump(Persona::HighSpender, 2),
        _ => {}
    }

    let persona = scores.top();
    tracing::debug!(?persona, scores = ?scores.scores, "classification pass complete");

    Classification {
        persona,
        reasons: reasons.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_default_to_frequent_traveler() {
        let outcome = classify(&AnswerSet::new());
        assert_eq!(outcome.persona, Persona::FrequentTraveler);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn test_international_travel_signal() {
        let answers = AnswerSet {
            travels_internationally: Some(true),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::FrequentTraveler);
        assert_eq!(outcome.reasons, vec!["Travels internationally"]);
    }

    #[test]
    fn test_very_high_monthly_spend_wins_high_spender() {
        let answers = AnswerSet {
            monthly_spend: Some(150_000),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::HighSpender);
        assert!(outcome.reasons.contains(&"Monthly spend very high".to_string()));
    }

    #[test]
    fn test_mid_band_spend_scores_without_reason() {
        let answers = AnswerSet {
            monthly_spend: Some(30_000),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        // HighSpender +1 is the only signal, but no reason text is attached
        assert_eq!(outcome.persona, Persona::HighSpender);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn test_low_monthly_spend_leans_minimal_user() {
        let answers = AnswerSet {
            monthly_spend: Some(4_000),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::MinimalUser);
        assert_eq!(outcome.reasons, vec!["Low monthly spend"]);
    }

    #[test]
    fn test_absent_monthly_spend_is_not_a_low_spend_signal() {
        // A skipped spend question must not score like an explicit zero.
        let outcome = classify(&AnswerSet::new());
        assert_eq!(outcome.persona, Persona::FrequentTraveler);
    }

    #[test]
    fn test_explicit_not_new_to_credit_leans_minimal() {
        let answers = AnswerSet {
            new_to_credit: Some(false),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::MinimalUser);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn test_new_to_credit_signal() {
        let answers = AnswerSet {
            new_to_credit: Some(true),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::NewToCredit);
        assert_eq!(outcome.reasons, vec!["New to credit / thin file"]);
    }

    #[test]
    fn test_security_first_signal() {
        let answers = AnswerSet {
            security_first: Some(true),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::SecurityConscious);
        assert_eq!(
            outcome.reasons,
            vec!["Prioritizes security over convenience"]
        );
    }

    #[test]
    fn test_online_shopper_profile() {
        let answers = AnswerSet {
            online_spend: Some(SpendLevel::High),
            preferred_mode: Some(TransactionMode::Online),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        // Shopper 2+2 beats Spender 1
        assert_eq!(outcome.persona, Persona::OnlineShopper);
        assert_eq!(outcome.reasons, vec!["High online spend"]);
    }

    #[test]
    fn test_emi_habits_feed_both_spender_and_shopper() {
        let answers = AnswerSet {
            uses_emi: Some(EmiFrequency::Often),
            preferred_mode: Some(TransactionMode::MostlyEmi),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        // Spender 2+2 beats Shopper 1
        assert_eq!(outcome.persona, Persona::HighSpender);
        assert_eq!(outcome.reasons, vec!["Often converts to EMI"]);
    }

    #[test]
    fn test_occasional_emi_and_mixed_mode_carry_no_signal() {
        let answers = AnswerSet {
            uses_emi: Some(EmiFrequency::Occasionally),
            preferred_mode: Some(TransactionMode::Mixed),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::FrequentTraveler);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn test_tie_breaks_by_declaration_order() {
        // Contactless alone gives Traveler+1 and Spender+1: a dead tie that
        // must resolve to the first-declared persona.
        let answers = AnswerSet {
            prefers_contactless: Some(true),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(outcome.persona, Persona::FrequentTraveler);
        assert_eq!(outcome.reasons, vec!["Uses contactless frequently"]);
    }

    #[test]
    fn test_classification_is_pure() {
        let answers = AnswerSet {
            travels_internationally: Some(true),
            monthly_spend: Some(60_000),
            prefers_contactless: Some(true),
            ..AnswerSet::default()
        };
        let first = classify(&answers);
        let second = classify(&answers);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reasons_follow_rule_order() {
        let answers = AnswerSet {
            travels_internationally: Some(true),
            online_spend: Some(SpendLevel::Medium),
            monthly_spend: Some(150_000),
            ..AnswerSet::default()
        };
        let outcome = classify(&answers);
        assert_eq!(
            outcome.reasons,
            vec![
                "Travels internationally",
                "Moderate online spend",
                "Monthly spend very high"
            ]
        );
    }
}
