//! Fixed-coordinate extraction from the decoded sheet
//!
//! The conditions tab has a documented layout: header fields in column 1
//! of fixed rows, then three row ranges for snow zones, trails, and
//! services. Row indices are zero-based. The extraction is total: a
//! truncated or sparse sheet produces a sparse snapshot, never an error.

use domain::{
    ConditionsSnapshot, DomainStatus, ServiceEntry, ServiceStatus, SnowTrend, SnowZone, Trail,
    TrailDifficulty, TrailStatus,
};

use crate::config::SheetConfig;
use crate::csv::CsvGrid;

// Header layout (row, column 1)
const ROW_UPDATED_BY: usize = 5;
const ROW_STATUS: usize = 7;
const ROW_MESSAGE: usize = 8;
const ROW_GROOMING_DATE: usize = 9;
const ROW_GROOMING_TIME: usize = 10;
const ROW_ROAD_STATUS: usize = 12;
const ROW_FOYER_OPENS: usize = 13;
const ROW_FOYER_CLOSES: usize = 14;
const ROW_FOYER_MESSAGE: usize = 15;

// Section row ranges, inclusive
const ZONE_ROWS: std::ops::RangeInclusive<usize> = 16..=19;
const TRAIL_ROWS: std::ops::RangeInclusive<usize> = 23..=36;
const SERVICE_ROWS: std::ops::RangeInclusive<usize> = 48..=52;

fn opt(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Build a snapshot from a decoded sheet export.
#[must_use]
pub fn snapshot_from_grid(grid: &CsvGrid, config: &SheetConfig) -> ConditionsSnapshot {
    let road_status = {
        let raw = grid.get(ROW_ROAD_STATUS, 1);
        if raw.is_empty() { "Dégagée".to_string() } else { raw }
    };

    let snow_zones = ZONE_ROWS
        .filter_map(|row| {
            let name = grid.get(row, 0);
            if name.is_empty() {
                return None;
            }
            Some(SnowZone {
                name,
                depth_cm: or_dash(grid.get(row, 1)),
                quality: or_dash(grid.get(row, 2)),
                trend: SnowTrend::from_text(&grid.get(row, 3)),
            })
        })
        .collect();

    // A trail row counts only when both its name and its difficulty are
    // filled in; half-filled rows are drafts.
    let trails = TRAIL_ROWS
        .filter_map(|row| {
            let name = grid.get(row, 0);
            let level = grid.get(row, 1);
            if name.is_empty() || level.is_empty() {
                return None;
            }
            Some(Trail {
                name,
                difficulty: TrailDifficulty::from_sheet(&level),
                discipline: grid.get(row, 2),
                status: TrailStatus::from_sheet(&grid.get(row, 3)),
                length_km: opt(grid.get(row, 4)),
                notes: opt(grid.get(row, 5)),
            })
        })
        .collect();

    let services = SERVICE_ROWS
        .filter_map(|row| {
            let name = grid.get(row, 0);
            let lowered = name.to_lowercase();
            // Skip the column-header row of the section
            if name.is_empty() || lowered.contains("activité") || lowered.contains("service") {
                return None;
            }
            Some(ServiceEntry {
                name,
                status: ServiceStatus::from_sheet(&grid.get(row, 1)),
                hours: opt(grid.get(row, 2)),
                notes: opt(grid.get(row, 3)),
            })
        })
        .collect();

    ConditionsSnapshot {
        domain_status: DomainStatus::from_sheet(&grid.get(ROW_STATUS, 1)),
        special_message: opt(grid.get(ROW_MESSAGE, 1)),
        updated_by: opt(grid.get(ROW_UPDATED_BY, 1)),
        last_grooming: opt(grid.get(ROW_GROOMING_DATE, 1)),
        grooming_time: opt(grid.get(ROW_GROOMING_TIME, 1)),
        road_status,
        facility_opens_at: parse_hour(&grid.get(ROW_FOYER_OPENS, 1))
            .unwrap_or(config.default_opens_at),
        facility_closes_at: parse_hour(&grid.get(ROW_FOYER_CLOSES, 1))
            .unwrap_or(config.default_closes_at),
        facility_message: opt(grid.get(ROW_FOYER_MESSAGE, 1)),
        snow_zones,
        trails,
        services,
    }
}

fn or_dash(value: String) -> String {
    if value.is_empty() { "—".to_string() } else { value }
}

fn parse_hour(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|h| *h < 24)
}
