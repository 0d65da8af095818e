//! Snow depth trend for a measurement zone

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trend of the snow depth in a zone, derived from the free-text cell on
/// the sheet ("Hausse" / "Baisse" / anything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SnowTrend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl SnowTrend {
    /// Keyword match on the lowercased text; anything unrecognized is stable.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("hausse") {
            Self::Rising
        } else if text.contains("baisse") {
            Self::Falling
        } else {
            Self::Stable
        }
    }

    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Rising => "↑",
            Self::Falling => "↓",
            Self::Stable => "→",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rising => "Hausse",
            Self::Falling => "Baisse",
            Self::Stable => "Stable",
        }
    }
}

impl fmt::Display for SnowTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arrow(), self.label())
    }
}
