//! Questionnaire answer domain models.
//!
//! Answers are collected one field at a time by the front-end; every field
//! is optional and an absent field always means "no signal" for the
//! classifier, never an error.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where the cardholder uses the card most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum TransactionMode {
    /// Web and in-app checkout
    #[strum(to_string = "Online (web/app)", serialize = "online")]
    Online,
    /// POS terminals and tap-to-pay
    #[strum(to_string = "In-store (POS/Contactless)", serialize = "in-store")]
    InStore,
    /// Purchases usually converted to instalments
    #[strum(to_string = "Mostly EMI", serialize = "emi")]
    MostlyEmi,
    /// No dominant mode
    #[strum(to_string = "Mixed", serialize = "mixed")]
    Mixed,
}

/// Self-reported online spend level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SpendLevel {
    Low,
    Medium,
    High,
}

/// How often purchases are converted to EMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum EmiFrequency {
    Never,
    Occasionally,
    Often,
}

/// The full set of questionnaire answers for one session.
///
/// Every field is optional: `None` means the question was skipped and
/// contributes nothing to classification. The classifier never rejects an
/// answer set, no matter how sparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// Cardholder display name (informational only, never scored)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Approximate monthly card spend in rupees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<u32>,
    /// Preferred transaction mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_mode: Option<TransactionMode>,
    /// Online spend level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_spend: Option<SpendLevel>,
    /// Whether the cardholder travels internationally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travels_internationally: Option<bool>,
    /// Whether the cardholder often uses contactless / tap-to-pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefers_contactless: Option<bool>,
    /// How often purchases are converted to EMI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_emi: Option<EmiFrequency>,
    /// Prefers stricter security over convenience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_first: Option<bool>,
    /// New to credit / thin credit file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_to_credit: Option<bool>,
    /// Opt-in for real-time decline and suspicious activity alerts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl AnswerSet {
    /// Creates an empty answer set (no signals).
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_set_serializes_to_empty_object() {
        let answers = AnswerSet::new();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let answers: AnswerSet = serde_json::from_str(r#"{"monthly_spend": 42000}"#).unwrap();
        assert_eq!(answers.monthly_spend, Some(42000));
        assert!(answers.preferred_mode.is_none());
        assert!(answers.new_to_credit.is_none());
    }

    #[test]
    fn test_transaction_mode_parses_label_and_short_token() {
        assert_eq!(
            "Online (web/app)".parse::<TransactionMode>().unwrap(),
            TransactionMode::Online
        );
        assert_eq!(
            "in-store".parse::<TransactionMode>().unwrap(),
            TransactionMode::InStore
        );
        assert_eq!(
            "emi".parse::<TransactionMode>().unwrap(),
            TransactionMode::MostlyEmi
        );
        assert!("teleport".parse::<TransactionMode>().is_err());
    }

    #[test]
    fn test_spend_level_is_case_insensitive() {
        assert_eq!("high".parse::<SpendLevel>().unwrap(), SpendLevel::High);
        assert_eq!("Medium".parse::<SpendLevel>().unwrap(), SpendLevel::Medium);
    }

    #[test]
    fn test_transaction_mode_displays_full_label() {
        assert_eq!(TransactionMode::Online.to_string(), "Online (web/app)");
        assert_eq!(
            TransactionMode::InStore.to_string(),
            "In-store (POS/Contactless)"
        );
        assert_eq!(TransactionMode::MostlyEmi.to_string(), "Mostly EMI");
    }
}
