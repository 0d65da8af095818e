//! Conditions snapshot: the complete state of the domain for one refresh

use serde::{Deserialize, Serialize};

use crate::value_objects::{
    DomainStatus, ServiceStatus, SnowTrend, TrailDifficulty, TrailStatus,
};

/// Snow measurement zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnowZone {
    /// Zone name, usually with its elevation ("Foyer Bas (1400m)")
    pub name: String,
    /// Depth in centimeters, kept as published ("45", "—")
    pub depth_cm: String,
    /// Free-text quality label ("Bonne", "Excellente")
    pub quality: String,
    pub trend: SnowTrend,
}

/// One groomed trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    pub name: String,
    pub difficulty: TrailDifficulty,
    /// Discipline ("Classique", "Skating")
    pub discipline: String,
    pub status: TrailStatus,
    /// Length in kilometers, as published
    pub length_km: Option<String>,
    pub notes: Option<String>,
}

/// A service listed in the ACTIVITÉS & SERVICES section of the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub status: ServiceStatus,
    /// Opening hours of the day as free text ("9h00 - 17h00")
    pub hours: Option<String>,
    pub notes: Option<String>,
}

impl ServiceEntry {
    /// Whether this entry describes the reception building.
    /// Matched by case-insensitive substring on the name.
    #[must_use]
    pub fn is_reception(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("foyer") || name.contains("accueil")
    }
}

/// Open/closed tally over a trail list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailCount {
    pub open: usize,
    pub closed: usize,
    pub total: usize,
    /// Rounded percentage of open trails
    pub open_rate_pct: u32,
}

impl TrailCount {
    #[must_use]
    pub fn from_trails(trails: &[Trail]) -> Self {
        let open = trails.iter().filter(|t| t.status.is_open()).count();
        let closed = trails
            .iter()
            .filter(|t| t.status == TrailStatus::Closed)
            .count();
        let total = trails.len();
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let open_rate_pct = if total == 0 {
            0
        } else {
            (open as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            open,
            closed,
            total,
            open_rate_pct,
        }
    }
}

/// Complete, immutable set of condition data produced by one refresh cycle.
///
/// A snapshot comes from exactly one provider (or the built-in demo data);
/// snapshots are never merged across providers and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionsSnapshot {
    pub domain_status: DomainStatus,
    /// Optional banner message from the operators
    pub special_message: Option<String>,
    /// Who last updated the sheet
    pub updated_by: Option<String>,
    /// Last grooming date as free text
    pub last_grooming: Option<String>,
    /// Time of the last grooming pass
    pub grooming_time: Option<String>,
    /// Free-text access road status
    pub road_status: String,
    /// Reception building opening hour (0-23)
    pub facility_opens_at: u32,
    /// Reception building closing hour (0-23)
    pub facility_closes_at: u32,
    /// Optional special message for the reception building
    pub facility_message: Option<String>,
    pub snow_zones: Vec<SnowZone>,
    pub trails: Vec<Trail>,
    pub services: Vec<ServiceEntry>,
}

impl ConditionsSnapshot {
    /// The reception building entry of the services list, if any
    #[must_use]
    pub fn reception(&self) -> Option<&ServiceEntry> {
        self.services.iter().find(|s| s.is_reception())
    }

    #[must_use]
    pub fn trail_count(&self) -> TrailCount {
        TrailCount::from_trails(&self.trails)
    }

    /// Grooming line for the status banner
    #[must_use]
    pub fn grooming_label(&self) -> String {
        match (&self.last_grooming, &self.grooming_time) {
            (Some(date), Some(time)) => format!("Dernier damage : {date} à {time}"),
            (Some(date), None) => format!("Dernier damage : {date}"),
            _ => "Damage : informations en attente".to_string(),
        }
    }

    /// Built-in demonstration snapshot, shown when every provider fails.
    #[must_use]
    pub fn demo() -> Self {
        let zone = |name: &str, depth: &str, quality: &str, trend: SnowTrend| SnowZone {
            name: name.to_string(),
            depth_cm: depth.to_string(),
            quality: quality.to_string(),
            trend,
        };
        let trail = |name: &str,
                     difficulty: TrailDifficulty,
                     discipline: &str,
                     status: TrailStatus,
                     km: &str,
                     notes: &str| Trail {
            name: name.to_string(),
            difficulty,
            discipline: discipline.to_string(),
            status,
            length_km: Some(km.to_string()),
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        };

        Self {
            domain_status: DomainStatus::Open,
            special_message: None,
            updated_by: None,
            last_grooming: Some("N/A".to_string()),
            grooming_time: None,
            road_status: "Renseignez-vous au foyer avant de partir".to_string(),
            facility_opens_at: 9,
            facility_closes_at: 17,
            facility_message: None,
            snow_zones: vec![
                zone("Foyer Bas (1400m)", "45", "Bonne", SnowTrend::Stable),
                zone("Foyer Haut (1600m)", "65", "Très bonne", SnowTrend::Rising),
                zone("Crêt du Poulet (1726m)", "85", "Excellente", SnowTrend::Stable),
            ],
            trails: vec![
                trail("Crève-Cœur", TrailDifficulty::Green, "Classique", TrailStatus::Open, "2.5", ""),
                trail("Les Môilles", TrailDifficulty::Green, "Skating", TrailStatus::Open, "4.5", ""),
                trail("Piste du refuge", TrailDifficulty::Blue, "Classique", TrailStatus::Open, "8", "Accès refuge"),
                trail("Les Ramiettes", TrailDifficulty::Blue, "Skating", TrailStatus::Open, "6", ""),
                trail("Belle Aiguette", TrailDifficulty::Blue, "Classique", TrailStatus::Open, "5.5", ""),
                trail("La Grande Teppe", TrailDifficulty::Red, "Classique", TrailStatus::Open, "7", ""),
                trail("Le Levant", TrailDifficulty::Red, "Skating", TrailStatus::Open, "9", ""),
                trail("Les Crêtes", TrailDifficulty::Black, "Skating", TrailStatus::Closed, "6", "Enneigement insuffisant"),
            ],
            services: Vec::new(),
        }
    }
}
