//! WMO weather code lookup
//!
//! Fixed mapping from the WMO weather interpretation codes used by
//! Open-Meteo to a French label and an emoji icon.
//! See: <https://open-meteo.com/en/docs> for the code reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder label for codes outside the table
pub const UNKNOWN_LABEL: &str = "—";
/// Placeholder icon for codes outside the table
pub const UNKNOWN_ICON: &str = "🌡";

/// A WMO weather interpretation code.
///
/// Any integer is representable; codes outside the table map to the
/// placeholder label and icon instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u8);

impl WeatherCode {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.0 {
            0 => "Dégagé",
            1 => "Peu nuageux",
            2 => "Nuageux",
            3 => "Couvert",
            45 => "Brouillard",
            48 => "Brouillard givrant",
            51 => "Bruine légère",
            53 => "Bruine",
            55 => "Bruine forte",
            61 => "Pluie légère",
            63 => "Pluie",
            65 => "Forte pluie",
            71 => "Neige légère",
            73 => "Neige",
            75 => "Forte neige",
            77 => "Grésil",
            80 => "Averses légères",
            81 => "Averses",
            82 => "Averses fortes",
            85 => "Neige en averses",
            86 => "Forte neige en averses",
            95 => "Orage",
            96 => "Orage + grêle",
            99 => "Orage violent",
            _ => UNKNOWN_LABEL,
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self.0 {
            0 => "☀️",
            1 => "🌤",
            2 => "⛅",
            3 => "☁️",
            45 | 48 => "🌫",
            51 | 53 | 80 => "🌦",
            55 | 61 | 63 | 65 | 81 => "🌧",
            71 | 77 | 85 => "🌨",
            73 | 75 | 86 => "❄️",
            82 | 95 | 96 | 99 => "⛈",
            _ => UNKNOWN_ICON,
        }
    }

    /// Whether the code appears in the lookup table
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(
            self.0,
            0..=3 | 45 | 48 | 51 | 53 | 55 | 61 | 63 | 65 | 71 | 73 | 75 | 77 | 80..=82 | 85 | 86 | 95 | 96 | 99
        )
    }
}

impl From<u8> for WeatherCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_CODES: [u8; 24] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99,
    ];

    #[test]
    fn all_table_codes_have_label_and_icon() {
        for code in KNOWN_CODES {
            let wc = WeatherCode(code);
            assert!(wc.is_known(), "code {code} should be in the table");
            assert_ne!(wc.label(), UNKNOWN_LABEL, "code {code} lacks a label");
            assert_ne!(wc.icon(), UNKNOWN_ICON, "code {code} lacks an icon");
        }
    }

    #[test]
    fn unknown_codes_map_to_placeholder() {
        for code in [4u8, 44, 50, 100, 255] {
            let wc = WeatherCode(code);
            assert!(!wc.is_known());
            assert_eq!(wc.label(), UNKNOWN_LABEL);
            assert_eq!(wc.icon(), UNKNOWN_ICON);
        }
    }

    #[test]
    fn snow_codes_use_snow_icons() {
        assert_eq!(WeatherCode(73).icon(), "❄️");
        assert_eq!(WeatherCode(71).icon(), "🌨");
        assert_eq!(WeatherCode(73).label(), "Neige");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&WeatherCode(73)).unwrap();
        assert_eq!(json, "73");
        let back: WeatherCode = serde_json::from_str("3").unwrap();
        assert_eq!(back, WeatherCode(3));
    }
}
