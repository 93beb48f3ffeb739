//! Card-control settings record.

use serde::{Deserialize, Serialize};

/// A full card-control settings record.
///
/// The schema is fixed: all seven toggles are always present, plus the
/// suggested monthly limit and an optional advisory note. The same type
/// serves both the *recommended* record (derived, recomputed on every
/// classification) and the *applied* record (session-lifetime state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSettings {
    /// Online (web/app) transactions
    pub online_enabled: bool,
    /// International transactions
    pub international_enabled: bool,
    /// Contactless / POS transactions
    pub contactless_enabled: bool,
    /// NFC / tap-and-pay
    pub nfc_enabled: bool,
    /// Virtual single-use cards for online checkout
    pub virtual_card_enabled: bool,
    /// Auto-EMI suggestions for big purchases
    pub auto_emi: bool,
    /// Suggested monthly limit in rupees
    pub monthly_limit: u32,
    /// Real-time decline and suspicious activity alerts
    pub notifications: bool,
    /// Advisory note attached to a recommendation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CardSettings {
    /// The factory-default applied record.
    ///
    /// This is what a fresh session starts with and what an explicit reset
    /// restores, regardless of anything applied in between.
    pub fn factory_default() -> Self {
        Self {
            online_enabled: true,
            international_enabled: false,
            contactless_enabled: true,
            nfc_enabled: true,
            virtual_card_enabled: false,
            auto_emi: false,
            monthly_limit: 75_000,
            notifications: true,
            note: None,
        }
    }
}

impl Default for CardSettings {
    fn default() -> Self {
        Self::factory_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_default_values() {
        let settings = CardSettings::factory_default();
        assert!(settings.online_enabled);
        assert!(!settings.international_enabled);
        assert!(settings.contactless_enabled);
        assert!(settings.nfc_enabled);
        assert!(!settings.virtual_card_enabled);
        assert!(!settings.auto_emi);
        assert_eq!(settings.monthly_limit, 75_000);
        assert!(settings.notifications);
        assert!(settings.note.is_none());
    }

    #[test]
    fn test_note_is_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&CardSettings::factory_default()).unwrap();
        assert!(!json.contains("note"));
    }
}
