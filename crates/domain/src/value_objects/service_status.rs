//! Open/closed status of an on-site service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a service listed in the ACTIVITÉS & SERVICES sheet section.
///
/// Only OUVERT counts as open; any other value (including an empty cell)
/// is treated as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Open,
    #[default]
    Closed,
}

impl ServiceStatus {
    #[must_use]
    pub fn from_sheet(raw: &str) -> Self {
        if raw.trim().to_uppercase() == "OUVERT" {
            Self::Open
        } else {
            Self::Closed
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "OUVERT",
            Self::Closed => "FERME",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ouvert_is_open() {
        assert_eq!(ServiceStatus::from_sheet("OUVERT"), ServiceStatus::Open);
        assert_eq!(ServiceStatus::from_sheet("ouvert"), ServiceStatus::Open);
        assert_eq!(ServiceStatus::from_sheet("FERME"), ServiceStatus::Closed);
        assert_eq!(ServiceStatus::from_sheet(""), ServiceStatus::Closed);
        assert_eq!(ServiceStatus::from_sheet("ferme?"), ServiceStatus::Closed);
    }

    #[test]
    fn default_is_closed() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Closed);
    }
}
