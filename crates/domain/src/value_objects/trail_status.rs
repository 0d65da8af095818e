//! Per-trail open/closed status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single trail.
///
/// Sheet labels are the feminine French forms (OUVERTE / FERMEE / REDUITE /
/// ENTRETIEN). Unknown labels are preserved and rendered undecorated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrailStatus {
    #[default]
    Open,
    Closed,
    Reduced,
    Maintenance,
    Other(String),
}

impl TrailStatus {
    /// Parse the sheet label; an empty cell means open.
    #[must_use]
    pub fn from_sheet(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "" | "OUVERTE" => Self::Open,
            "FERMEE" => Self::Closed,
            "REDUITE" => Self::Reduced,
            "ENTRETIEN" => Self::Maintenance,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Open => "OUVERTE",
            Self::Closed => "FERMEE",
            Self::Reduced => "REDUITE",
            Self::Maintenance => "ENTRETIEN",
            Self::Other(raw) => raw,
        }
    }

    /// Icon for the status pill; unknown statuses get none.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Open => "✅",
            Self::Closed => "❌",
            Self::Reduced => "⚠️",
            Self::Maintenance => "🔧",
            Self::Other(_) => "",
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for TrailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
