//! Access-road status classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback advisory shown when the sheet carries no road information
pub const DEFAULT_ROAD_ADVISORY: &str = "Vérifiez les conditions avant de partir";

/// Severity of the access-road status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoadSeverity {
    #[default]
    Ok,
    Warning,
    Danger,
}

impl RoadSeverity {
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Ok => "✅",
            Self::Warning => "⚠️",
            Self::Danger => "🚫",
        }
    }
}

/// Classified road status: the free text from the sheet plus its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadReport {
    pub severity: RoadSeverity,
    pub text: String,
}

impl RoadReport {
    /// Classify a free-text road status by keyword scan.
    ///
    /// Danger keywords are checked before warning keywords; the first match
    /// wins. An empty input is replaced by [`DEFAULT_ROAD_ADVISORY`] before
    /// classification.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let text = if raw.trim().is_empty() {
            DEFAULT_ROAD_ADVISORY.to_string()
        } else {
            raw.trim().to_string()
        };

        let lowered = text.to_lowercase();
        let severity = if ["fermé", "bloqué", "interdit"]
            .iter()
            .any(|kw| lowered.contains(kw))
        {
            RoadSeverity::Danger
        } else if ["chaîne", "pneu neige", "attention", "vigilance"]
            .iter()
            .any(|kw| lowered.contains(kw))
        {
            RoadSeverity::Warning
        } else {
            RoadSeverity::Ok
        };

        Self { severity, text }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.severity.icon()
    }
}

impl fmt::Display for RoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_road_is_danger() {
        let report = RoadReport::classify("Route fermée — accès interdit");
        assert_eq!(report.severity, RoadSeverity::Danger);
        assert_eq!(report.icon(), "🚫");
    }

    #[test]
    fn chains_required_is_warning() {
        let report = RoadReport::classify("Chaînes obligatoires");
        assert_eq!(report.severity, RoadSeverity::Warning);
        assert_eq!(report.icon(), "⚠️");
    }

    #[test]
    fn danger_wins_over_warning() {
        // Both keyword families present: the danger scan runs first.
        let report = RoadReport::classify("Attention, route bloquée");
        assert_eq!(report.severity, RoadSeverity::Danger);
    }

    #[test]
    fn empty_input_gets_default_advisory_and_ok() {
        let report = RoadReport::classify("");
        assert_eq!(report.severity, RoadSeverity::Ok);
        assert_eq!(report.text, DEFAULT_ROAD_ADVISORY);
    }

    #[test]
    fn plain_text_is_ok() {
        let report = RoadReport::classify("Dégagée");
        assert_eq!(report.severity, RoadSeverity::Ok);
        assert_eq!(report.text, "Dégagée");
    }

    #[test]
    fn keyword_scan_is_case_insensitive() {
        assert_eq!(
            RoadReport::classify("ROUTE FERMÉE").severity,
            RoadSeverity::Danger
        );
        assert_eq!(
            RoadReport::classify("VIGILANCE verglas").severity,
            RoadSeverity::Warning
        );
    }
}
