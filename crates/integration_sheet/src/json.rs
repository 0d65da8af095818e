//! Apps Script JSON payload
//!
//! The Apps Script endpoint serializes the sheet server-side and is the
//! preferred source. A body is accepted only if it carries at least one of
//! the three expected top-level keys (`statut`, `zones`, `pistes`); a
//! missing `services` array normalizes to empty.

use domain::{
    ConditionsSnapshot, DomainStatus, ServiceEntry, ServiceStatus, SnowTrend, SnowZone, Trail,
    TrailDifficulty, TrailStatus,
};
use serde::Deserialize;

use crate::config::SheetConfig;
use crate::error::SheetError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawConditions {
    statut: Option<String>,
    message: Option<String>,
    #[serde(rename = "miseAJourPar")]
    mise_a_jour_par: Option<String>,
    #[serde(rename = "dernierDamage")]
    dernier_damage: Option<String>,
    #[serde(rename = "heureDamage")]
    heure_damage: Option<String>,
    #[serde(rename = "etatRoute")]
    etat_route: Option<String>,
    #[serde(rename = "foyerOuvertA")]
    foyer_ouvert_a: Option<u32>,
    #[serde(rename = "foyerFermeA")]
    foyer_ferme_a: Option<u32>,
    #[serde(rename = "foyerMessage")]
    foyer_message: Option<String>,
    #[serde(default)]
    zones: Option<Vec<RawZone>>,
    #[serde(default)]
    pistes: Option<Vec<RawTrail>>,
    #[serde(default)]
    services: Option<Vec<RawService>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawZone {
    nom: Option<String>,
    hauteur: Option<String>,
    qualite: Option<String>,
    tendance: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTrail {
    nom: Option<String>,
    niveau: Option<String>,
    #[serde(rename = "type")]
    discipline: Option<String>,
    statut: Option<String>,
    km: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawService {
    nom: Option<String>,
    statut: Option<String>,
    horaires: Option<String>,
    notes: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse an Apps Script body into a snapshot.
///
/// Rejects bodies carrying none of the expected keys; an Apps Script
/// deployment error typically answers 200 with an unrelated document.
pub(crate) fn snapshot_from_json(
    body: &str,
    config: &SheetConfig,
) -> Result<ConditionsSnapshot, SheetError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SheetError::ParseError(e.to_string()))?;

    let has_conditions_key = ["statut", "zones", "pistes"]
        .iter()
        .any(|key| value.get(key).is_some_and(|v| !v.is_null()));
    if !has_conditions_key {
        return Err(SheetError::MissingConditionsKeys);
    }

    let raw: RawConditions =
        serde_json::from_value(value).map_err(|e| SheetError::ParseError(e.to_string()))?;

    let zones = raw
        .zones
        .unwrap_or_default()
        .into_iter()
        .filter_map(|z| {
            let name = non_empty(z.nom)?;
            Some(SnowZone {
                name,
                depth_cm: non_empty(z.hauteur).unwrap_or_else(|| "—".to_string()),
                quality: non_empty(z.qualite).unwrap_or_else(|| "—".to_string()),
                trend: SnowTrend::from_text(&z.tendance.unwrap_or_default()),
            })
        })
        .collect();

    let trails = raw
        .pistes
        .unwrap_or_default()
        .into_iter()
        .filter_map(|t| {
            let name = non_empty(t.nom)?;
            let difficulty = TrailDifficulty::from_sheet(&non_empty(t.niveau)?);
            Some(Trail {
                name,
                difficulty,
                discipline: non_empty(t.discipline).unwrap_or_default(),
                status: TrailStatus::from_sheet(&t.statut.unwrap_or_default()),
                length_km: non_empty(t.km),
                notes: non_empty(t.notes),
            })
        })
        .collect();

    // Missing services are normal: older sheet layouts did not have the
    // ACTIVITÉS & SERVICES section.
    let services = raw
        .services
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| {
            let name = non_empty(s.nom)?;
            Some(ServiceEntry {
                name,
                status: ServiceStatus::from_sheet(&s.statut.unwrap_or_default()),
                hours: non_empty(s.horaires),
                notes: non_empty(s.notes),
            })
        })
        .collect();

    Ok(ConditionsSnapshot {
        domain_status: DomainStatus::from_sheet(&raw.statut.unwrap_or_default()),
        special_message: non_empty(raw.message),
        updated_by: non_empty(raw.mise_a_jour_par),
        last_grooming: non_empty(raw.dernier_damage),
        grooming_time: non_empty(raw.heure_damage),
        road_status: non_empty(raw.etat_route).unwrap_or_default(),
        facility_opens_at: raw.foyer_ouvert_a.unwrap_or(config.default_opens_at),
        facility_closes_at: raw.foyer_ferme_a.unwrap_or(config.default_closes_at),
        facility_message: non_empty(raw.foyer_message),
        snow_zones: zones,
        trails,
        services,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SheetConfig {
        SheetConfig::default()
    }

    #[test]
    fn full_body_maps_every_field() {
        let body = r#"{
            "statut": "REDUIT",
            "message": "Ouverture partielle ce weekend",
            "dernierDamage": "12/01",
            "heureDamage": "7h30",
            "etatRoute": "Chaînes obligatoires",
            "foyerOuvertA": 10,
            "foyerFermeA": 16,
            "foyerMessage": "",
            "zones": [
                {"nom": "Foyer Bas (1400m)", "hauteur": "45", "qualite": "Bonne", "tendance": "Hausse"}
            ],
            "pistes": [
                {"nom": "Les Crêtes", "niveau": "Noir", "type": "Skating", "statut": "FERMEE", "km": "6", "notes": "Enneigement insuffisant"}
            ],
            "services": [
                {"nom": "Foyer d'accueil", "statut": "OUVERT", "horaires": "9h00 - 17h00"}
            ]
        }"#;

        let snapshot = snapshot_from_json(body, &config()).expect("should parse");
        assert_eq!(snapshot.domain_status, DomainStatus::Reduced);
        assert_eq!(
            snapshot.special_message.as_deref(),
            Some("Ouverture partielle ce weekend")
        );
        assert_eq!(snapshot.facility_opens_at, 10);
        assert_eq!(snapshot.facility_closes_at, 16);
        assert!(snapshot.facility_message.is_none());
        assert_eq!(snapshot.snow_zones.len(), 1);
        assert_eq!(snapshot.snow_zones[0].trend, SnowTrend::Rising);
        assert_eq!(snapshot.trails.len(), 1);
        assert_eq!(snapshot.trails[0].status, TrailStatus::Closed);
        assert_eq!(snapshot.services.len(), 1);
        assert!(snapshot.services[0].is_reception());
    }

    #[test]
    fn missing_services_normalize_to_empty() {
        let body = r#"{"statut": "OUVERT"}"#;
        let snapshot = snapshot_from_json(body, &config()).expect("should parse");
        assert!(snapshot.services.is_empty());
        assert_eq!(snapshot.facility_opens_at, 9);
        assert_eq!(snapshot.facility_closes_at, 17);
    }

    #[test]
    fn body_without_conditions_keys_is_rejected() {
        let body = r#"{"error": "deployment not found"}"#;
        assert!(matches!(
            snapshot_from_json(body, &config()),
            Err(SheetError::MissingConditionsKeys)
        ));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            snapshot_from_json("<!DOCTYPE html>", &config()),
            Err(SheetError::ParseError(_))
        ));
    }

    #[test]
    fn zones_or_pistes_alone_are_enough() {
        let body = r#"{"zones": []}"#;
        assert!(snapshot_from_json(body, &config()).is_ok());
        let body = r#"{"pistes": []}"#;
        assert!(snapshot_from_json(body, &config()).is_ok());
    }

    #[test]
    fn trails_without_name_or_level_are_dropped() {
        let body = r#"{
            "statut": "OUVERT",
            "pistes": [
                {"nom": "Sans niveau"},
                {"niveau": "Vert"},
                {"nom": "Complète", "niveau": "Vert"}
            ]
        }"#;
        let snapshot = snapshot_from_json(body, &config()).expect("should parse");
        assert_eq!(snapshot.trails.len(), 1);
        assert_eq!(snapshot.trails[0].name, "Complète");
    }
}
