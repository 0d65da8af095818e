//! Overall open/closed status of the nordic domain

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the whole skiing domain, as published on the conditions sheet.
///
/// The sheet carries French uppercase labels (OUVERT / FERME / REDUIT).
/// Anything else is preserved verbatim so an unexpected sheet value is
/// displayed as-is instead of breaking rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    /// Domain fully open
    #[default]
    Open,
    /// Domain closed
    Closed,
    /// Partial opening
    Reduced,
    /// Unrecognized raw label, displayed without decoration
    Other(String),
}

impl DomainStatus {
    /// Parse the sheet label. Matching is done on the uppercased value.
    #[must_use]
    pub fn from_sheet(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "" | "OUVERT" => Self::Open,
            "FERME" => Self::Closed,
            "REDUIT" => Self::Reduced,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Banner label shown above the conditions page
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Open => "Domaine ouvert",
            Self::Closed => "Domaine fermé",
            Self::Reduced => "Ouverture partielle",
            Self::Other(raw) => raw,
        }
    }

    /// Status icon for the banner pill
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Open => "✅",
            Self::Closed => "❌",
            Self::Reduced => "⚠️",
            Self::Other(_) => "ℹ️",
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
