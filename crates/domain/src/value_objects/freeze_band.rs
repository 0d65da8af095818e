//! Freeze-level altitude band relative to the site elevation

use serde::{Deserialize, Serialize};

/// Three-way banded classification of the 0 °C isotherm altitude against
/// the site elevation. Not a continuous score: only the band matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreezeBand {
    /// Isotherm well above the site: cold snow guaranteed
    ColdSnow,
    /// Isotherm crosses the domain
    MidDomain,
    /// Isotherm below the site: ground thaw possible
    GroundThaw,
}

impl FreezeBand {
    /// Classify a rounded isotherm altitude against the site elevation.
    /// More than 200 m above the site counts as cold; below the site as
    /// thaw risk; anything between crosses the domain.
    #[must_use]
    pub const fn classify(altitude_m: i32, site_elevation_m: i32) -> Self {
        if altitude_m > site_elevation_m + 200 {
            Self::ColdSnow
        } else if altitude_m < site_elevation_m {
            Self::GroundThaw
        } else {
            Self::MidDomain
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ColdSnow => "✅ Neige froide garantie",
            Self::MidDomain => "→ Limite à mi-domaine",
            Self::GroundThaw => "⚠️ Regel au sol possible",
        }
    }

    /// Accent color, when the band warrants one
    #[must_use]
    pub const fn color(&self) -> Option<&'static str> {
        match self {
            Self::ColdSnow => Some("#4ade80"),
            Self::GroundThaw => Some("#f87171"),
            Self::MidDomain => None,
        }
    }
}
