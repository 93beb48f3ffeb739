//! Persona domain model.
//!
//! Represents the fixed set of cardholder usage profiles the classifier can
//! assign. The set is closed: personas are not extensible at runtime.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A cardholder usage persona.
///
/// Declaration order matters: when two personas score equally, the one
/// declared first wins, so an all-zero score vector resolves to
/// `FrequentTraveler`. Keep this ordering stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Persona {
    /// Spends abroad regularly; needs international and contactless rails
    #[strum(serialize = "Frequent Traveler")]
    #[serde(rename = "Frequent Traveler")]
    FrequentTraveler,
    /// Most spend happens at online checkouts
    #[strum(serialize = "Online Shopper")]
    #[serde(rename = "Online Shopper")]
    OnlineShopper,
    /// Prefers locked-down rails over convenience
    #[strum(serialize = "Security-Conscious")]
    #[serde(rename = "Security-Conscious")]
    SecurityConscious,
    /// Thin credit file; conservative limits
    #[strum(serialize = "New-to-Credit")]
    #[serde(rename = "New-to-Credit")]
    NewToCredit,
    /// High monthly volume across every rail
    #[strum(serialize = "High Spender")]
    #[serde(rename = "High Spender")]
    HighSpender,
    /// Rarely uses the card
    #[strum(serialize = "Minimal User")]
    #[serde(rename = "Minimal User")]
    MinimalUser,
}

impl Persona {
    /// Number of personas in the closed set.
    pub const COUNT: usize = 6;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_persona_count_matches_iteration() {
        assert_eq!(Persona::iter().count(), Persona::COUNT);
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let order: Vec<Persona> = Persona::iter().collect();
        assert_eq!(order[0], Persona::FrequentTraveler);
        assert_eq!(order[5], Persona::MinimalUser);
    }

    #[test]
    fn test_display_uses_human_labels() {
        assert_eq!(Persona::FrequentTraveler.to_string(), "Frequent Traveler");
        assert_eq!(Persona::SecurityConscious.to_string(), "Security-Conscious");
        assert_eq!(Persona::NewToCredit.to_string(), "New-to-Credit");
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for persona in Persona::iter() {
            let parsed: Persona = persona.to_string().parse().unwrap();
            assert_eq!(parsed, persona);
        }
        assert!("Casual Swiper".parse::<Persona>().is_err());
    }

    #[test]
    fn test_serde_uses_human_labels() {
        let json = serde_json::to_string(&Persona::HighSpender).unwrap();
        assert_eq!(json, "\"High Spender\"");
        let back: Persona = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Persona::HighSpender);
    }
}
