//! Trail difficulty rating

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty color of a trail (French nordic convention).
///
/// Unknown ratings keep their raw text and render without a color marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailDifficulty {
    Green,
    Blue,
    Red,
    Black,
    Other(String),
}

impl TrailDifficulty {
    #[must_use]
    pub fn from_sheet(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "vert" => Self::Green,
            "bleu" => Self::Blue,
            "rouge" => Self::Red,
            "noir" => Self::Black,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Green => "Vert",
            Self::Blue => "Bleu",
            Self::Red => "Rouge",
            Self::Black => "Noir",
            Self::Other(raw) => raw,
        }
    }

    /// Colored dot shown next to the difficulty; none for unknown ratings.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Green => "🟢",
            Self::Blue => "🔵",
            Self::Red => "🔴",
            Self::Black => "⚫",
            Self::Other(_) => "",
        }
    }
}

impl fmt::Display for TrailDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
