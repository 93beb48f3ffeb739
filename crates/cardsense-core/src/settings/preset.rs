//! Per-persona recommendation presets.
//!
//! A pure static lookup: every persona maps to a fully-specified settings
//! record built by overriding the base record. This is a total function
//! with no failure mode.

use super::model::CardSettings;
use crate::persona::Persona;

/// The base recommendation record every persona preset starts from.
fn base() -> CardSettings {
    CardSettings {
        online_enabled: true,
        international_enabled: false,
        contactless_enabled: true,
        nfc_enabled: true,
        virtual_card_enabled: false,
        auto_emi: false,
        monthly_limit: 50_000,
        notifications: true,
        note: None,
    }
}

/// Returns the recommended settings record for a persona.
///
/// # Examples
///
/// ```
/// use cardsense_core::persona::Persona;
/// use cardsense_core::settings::recommend;
///
/// let reco = recommend(Persona::SecurityConscious);
/// assert!(!reco.online_enabled);
/// assert_eq!(reco.monthly_limit, 30_000);
/// ```
pub fn recommend(persona: Persona) -> CardSettings {
    match persona {
        Persona::FrequentTraveler => CardSettings {
            international_enabled: true,
            monthly_limit: 150_000,
            note: Some(
                "Enable international & contactless for seamless travel. \
                 Keep alerts on for unusual foreign transactions."
                    .to_string(),
            ),
            ..base()
        },
        Persona::OnlineShopper => CardSettings {
            virtual_card_enabled: true,
            contactless_enabled: false,
            auto_emi: true,
            monthly_limit: 80_000,
            note: Some(
                "Enable virtual single-use cards for safer online checkout. \
                 Auto-EMI useful for big purchases."
                    .to_string(),
            ),
            ..base()
        },
        Persona::SecurityConscious => CardSettings {
            online_enabled: false,
            virtual_card_enabled: true,
            contactless_enabled: false,
            nfc_enabled: false,
            monthly_limit: 30_000,
            note: Some(
                "Keep online/contactless off. Use virtual cards for trusted merchants only."
                    .to_string(),
            ),
            ..base()
        },
        Persona::NewToCredit => CardSettings {
            contactless_enabled: false,
            monthly_limit: 20_000,
            note: Some(
                "Start with conservative limits; consider secured card if needed.".to_string(),
            ),
            ..base()
        },
        Persona::HighSpender => CardSettings {
            virtual_card_enabled: true,
            auto_emi: true,
            monthly_limit: 250_000,
            note: Some(
                "Higher monthly limit with auto-EMI for big purchases and travel perks enabled."
                    .to_string(),
            ),
            ..base()
        },
        Persona::MinimalUser => CardSettings {
            contactless_enabled: false,
            nfc_enabled: false,
            monthly_limit: 15_000,
            note: Some(
                "Keep conservative limits and notifications to avoid surprises.".to_string(),
            ),
            ..base()
        },
    }
}

/// Returns the recommended settings for a free-form persona label.
///
/// Recognized labels go through [`recommend`]; anything else falls back to
/// the base record with a generic note.
pub fn recommend_for_label(label: &str) -> CardSettings {
    match label.parse::<Persona>() {
        Ok(persona) => recommend(persona),
        Err(_) => CardSettings {
            note: Some("Default recommendation.".to_string()),
            ..base()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_security_conscious_preset() {
        let reco = recommend(Persona::SecurityConscious);
        assert!(!reco.online_enabled);
        assert!(!reco.contactless_enabled);
        assert!(!reco.nfc_enabled);
        assert!(reco.virtual_card_enabled);
        assert_eq!(reco.monthly_limit, 30_000);
    }

    #[test]
    fn test_frequent_traveler_preset() {
        let reco = recommend(Persona::FrequentTraveler);
        assert!(reco.international_enabled);
        assert!(reco.contactless_enabled);
        assert!(reco.nfc_enabled);
        assert_eq!(reco.monthly_limit, 150_000);
    }

    #[test]
    fn test_high_spender_preset_leaves_international_off() {
        // High spend alone is not a travel signal; international stays off.
        let reco = recommend(Persona::HighSpender);
        assert!(reco.online_enabled);
        assert!(!reco.international_enabled);
        assert!(reco.auto_emi);
        assert_eq!(reco.monthly_limit, 250_000);
    }

    #[test]
    fn test_every_preset_is_distinct_and_fully_specified() {
        let presets: Vec<CardSettings> = Persona::iter().map(recommend).collect();
        for (i, a) in presets.iter().enumerate() {
            assert!(a.note.as_deref().is_some_and(|n| !n.is_empty()));
            for b in presets.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_notifications_stay_on_in_every_preset() {
        for persona in Persona::iter() {
            assert!(recommend(persona).notifications);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_base() {
        let reco = recommend_for_label("unknown-persona");
        assert!(reco.online_enabled);
        assert!(!reco.international_enabled);
        assert!(reco.contactless_enabled);
        assert!(reco.nfc_enabled);
        assert!(!reco.virtual_card_enabled);
        assert!(!reco.auto_emi);
        assert_eq!(reco.monthly_limit, 50_000);
        assert_eq!(reco.note.as_deref(), Some("Default recommendation."));
    }

    #[test]
    fn test_known_label_resolves_to_preset() {
        let reco = recommend_for_label("Minimal User");
        assert_eq!(reco, recommend(Persona::MinimalUser));
    }
}
