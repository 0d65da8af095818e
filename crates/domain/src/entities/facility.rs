//! Resolved reception-building status

use serde::{Deserialize, Serialize};

/// Current open/closed state of the reception building ("foyer"), derived
/// from the clock and the published schedule. Never stored, always
/// recomputed on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityStatus {
    pub is_open_now: bool,
    /// Opening hours as displayed ("9h – 17h" or the sheet's own text)
    pub hours: String,
    /// Human-readable next change ("Ferme à 17h", "Ouvre samedi à 9h", ...)
    pub next_change: String,
}

impl FacilityStatus {
    /// Banner headline for the live-status strip
    #[must_use]
    pub const fn banner_label(&self) -> &'static str {
        if self.is_open_now {
            "✅ Foyer OUVERT"
        } else {
            "❌ Foyer FERMÉ"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_follows_open_state() {
        let open = FacilityStatus {
            is_open_now: true,
            hours: "9h – 17h".to_string(),
            next_change: "Ferme à 17h".to_string(),
        };
        assert_eq!(open.banner_label(), "✅ Foyer OUVERT");

        let closed = FacilityStatus {
            is_open_now: false,
            ..open
        };
        assert_eq!(closed.banner_label(), "❌ Foyer FERMÉ");
    }
}
