//! Estimated snow quality derived from air temperature

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snow quality estimate, classified from the current temperature into five
/// ordered bands by ascending upper bound: -8, -3, 0, +2, then everything
/// warmer. The classification is total over the real line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnowQuality {
    /// t ≤ -8 °C
    DryPowder,
    /// -8 < t ≤ -3 °C
    GoodGlide,
    /// -3 < t ≤ 0 °C
    FairGlide,
    /// 0 < t ≤ 2 °C
    Transformed,
    /// t > 2 °C
    HeavyWet,
}

impl SnowQuality {
    /// Pick the first band whose upper bound is at or above the temperature.
    #[must_use]
    pub fn from_temperature(temp_c: f32) -> Self {
        if temp_c <= -8.0 {
            Self::DryPowder
        } else if temp_c <= -3.0 {
            Self::GoodGlide
        } else if temp_c <= 0.0 {
            Self::FairGlide
        } else if temp_c <= 2.0 {
            Self::Transformed
        } else {
            Self::HeavyWet
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DryPowder => "Poudreuse sèche",
            Self::GoodGlide => "Bonne glisse",
            Self::FairGlide => "Glisse correcte",
            Self::Transformed => "Neige transformée",
            Self::HeavyWet => "Lourde et mouillée",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::DryPowder => "🌨",
            Self::GoodGlide => "❄️",
            Self::FairGlide => "⛷",
            Self::Transformed => "💧",
            Self::HeavyWet => "🌧",
        }
    }

    /// Display color for the quality line
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::DryPowder => "#7ec8e3",
            Self::GoodGlide => "#a8e6cf",
            Self::FairGlide => "#90d4a0",
            Self::Transformed => "#ffd580",
            Self::HeavyWet => "#f87171",
        }
    }
}

impl fmt::Display for SnowQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}
