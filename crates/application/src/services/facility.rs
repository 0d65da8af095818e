//! Reception building ("foyer") status resolution
//!
//! Pure function of (clock, schedule data): no hidden state, deterministic
//! under test with a fixed timestamp. The sheet tells us at most whether
//! the foyer is open *today*; when it is closed and the sheet says nothing
//! about tomorrow, the resolver deliberately emits a neutral contact
//! message instead of guessing a next opening date.

use chrono::{DateTime, Datelike, Timelike, Weekday};
use chrono_tz::Tz;
use domain::{ConditionsSnapshot, FacilityStatus};

/// Fallback schedule used when no sheet data is available
#[derive(Debug, Clone)]
pub struct FacilityDefaults {
    /// Opening hour (0-23)
    pub opens_at: u32,
    /// Closing hour (0-23)
    pub closes_at: u32,
    /// Phone number shown in the neutral contact message
    pub contact_phone: String,
}

/// Resolve the current foyer state from the clock and optional sheet data.
#[must_use]
pub fn resolve_facility_status(
    now: &DateTime<Tz>,
    schedule: Option<&ConditionsSnapshot>,
    defaults: &FacilityDefaults,
) -> FacilityStatus {
    let opens_at = schedule.map_or(defaults.opens_at, |s| s.facility_opens_at);
    let closes_at = schedule.map_or(defaults.closes_at, |s| s.facility_closes_at);
    let hour = now.hour();
    let weekday = now.weekday();

    // The sheet's services section decides whether the foyer is open today;
    // without it, weekends are the default opening days.
    let reception = schedule.and_then(ConditionsSnapshot::reception);
    let open_today = reception.map_or_else(|| is_weekend(weekday), |r| r.status.is_open());

    let is_open_now = open_today && hour >= opens_at && hour < closes_at;

    let hours = reception
        .and_then(|r| r.hours.clone())
        .unwrap_or_else(|| format!("{opens_at}h – {closes_at}h"));

    let next_change = if is_open_now {
        format!("Ferme à {closes_at}h")
    } else if open_today && hour < opens_at {
        format!("Ouvre à {opens_at}h aujourd'hui")
    } else if is_weekend(weekday.succ()) {
        format!("Ouvre demain à {opens_at}h")
    } else if schedule.is_some() {
        // Closed today per the sheet, and the sheet carries nothing about
        // tomorrow: no prediction is possible.
        format!(
            "Prochaine ouverture : nous contacter — ☎ {}",
            defaults.contact_phone
        )
    } else {
        match days_until_saturday(weekday) {
            1 => format!("Ouvre demain à {opens_at}h"),
            _ => format!("Ouvre samedi à {opens_at}h"),
        }
    };

    // A special message from the sheet replaces the displayed text only.
    let next_change = schedule
        .and_then(|s| s.facility_message.clone())
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(next_change);

    FacilityStatus {
        is_open_now,
        hours,
        next_change,
    }
}

const fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Days until the next Saturday; a full week when today is Saturday.
fn days_until_saturday(weekday: Weekday) -> u32 {
    let from_sunday = weekday.num_days_from_sunday();
    if from_sunday == 6 {
        7
    } else {
        6 - from_sunday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Paris;
    use domain::{ServiceEntry, ServiceStatus};

    fn defaults() -> FacilityDefaults {
        FacilityDefaults {
            opens_at: 9,
            closes_at: 17,
            contact_phone: "04 76 71 06 47".to_string(),
        }
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Tz> {
        Paris
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap()
    }

    fn schedule_with_reception(status: ServiceStatus, hours: Option<&str>) -> ConditionsSnapshot {
        let mut snapshot = ConditionsSnapshot::demo();
        snapshot.services = vec![ServiceEntry {
            name: "Foyer d'accueil".to_string(),
            status,
            hours: hours.map(ToString::to_string),
            notes: None,
        }];
        snapshot
    }

    // 2026-01-09 is a Friday, 2026-01-10 a Saturday, 2026-01-11 a Sunday.

    #[test]
    fn open_during_hours_when_sheet_says_open() {
        let schedule = schedule_with_reception(ServiceStatus::Open, None);
        let status = resolve_facility_status(&at(2026, 1, 9, 10), Some(&schedule), &defaults());
        assert!(status.is_open_now);
        assert_eq!(status.next_change, "Ferme à 17h");
        assert_eq!(status.hours, "9h – 17h");
    }

    #[test]
    fn closed_after_hours_with_weekend_tomorrow() {
        let schedule = schedule_with_reception(ServiceStatus::Open, None);
        // Friday 20:00, tomorrow is Saturday
        let status = resolve_facility_status(&at(2026, 1, 9, 20), Some(&schedule), &defaults());
        assert!(!status.is_open_now);
        assert_eq!(status.next_change, "Ouvre demain à 9h");
    }

    #[test]
    fn before_opening_announces_today() {
        let schedule = schedule_with_reception(ServiceStatus::Open, None);
        let status = resolve_facility_status(&at(2026, 1, 9, 7), Some(&schedule), &defaults());
        assert!(!status.is_open_now);
        assert_eq!(status.next_change, "Ouvre à 9h aujourd'hui");
    }

    #[test]
    fn sheet_closed_today_midweek_gives_contact_message() {
        let schedule = schedule_with_reception(ServiceStatus::Closed, None);
        // Monday 2026-01-12 at 10:00; tomorrow is a weekday too
        let status = resolve_facility_status(&at(2026, 1, 12, 10), Some(&schedule), &defaults());
        assert!(!status.is_open_now);
        assert_eq!(
            status.next_change,
            "Prochaine ouverture : nous contacter — ☎ 04 76 71 06 47"
        );
    }

    #[test]
    fn sheet_closed_today_never_opens_even_in_hours() {
        let schedule = schedule_with_reception(ServiceStatus::Closed, None);
        let status = resolve_facility_status(&at(2026, 1, 10, 10), Some(&schedule), &defaults());
        assert!(!status.is_open_now);
    }

    #[test]
    fn without_schedule_weekends_are_open_by_default() {
        // Saturday 10:00
        let status = resolve_facility_status(&at(2026, 1, 10, 10), None, &defaults());
        assert!(status.is_open_now);
        assert_eq!(status.next_change, "Ferme à 17h");

        // Wednesday 10:00
        let status = resolve_facility_status(&at(2026, 1, 7, 10), None, &defaults());
        assert!(!status.is_open_now);
    }

    #[test]
    fn without_schedule_midweek_points_to_saturday() {
        // Wednesday 20:00: three days until Saturday
        let status = resolve_facility_status(&at(2026, 1, 7, 20), None, &defaults());
        assert_eq!(status.next_change, "Ouvre samedi à 9h");
    }

    #[test]
    fn without_schedule_friday_points_to_tomorrow() {
        // Friday 20:00: tomorrow is Saturday
        let status = resolve_facility_status(&at(2026, 1, 9, 20), None, &defaults());
        assert_eq!(status.next_change, "Ouvre demain à 9h");
    }

    #[test]
    fn closing_hour_is_exclusive() {
        let schedule = schedule_with_reception(ServiceStatus::Open, None);
        let status = resolve_facility_status(&at(2026, 1, 9, 17), Some(&schedule), &defaults());
        assert!(!status.is_open_now);

        let status = resolve_facility_status(&at(2026, 1, 9, 16), Some(&schedule), &defaults());
        assert!(status.is_open_now);
    }

    #[test]
    fn sheet_hours_text_wins_over_formatted_hours() {
        let schedule = schedule_with_reception(ServiceStatus::Open, Some("9h00 - 17h00"));
        let status = resolve_facility_status(&at(2026, 1, 9, 10), Some(&schedule), &defaults());
        assert_eq!(status.hours, "9h00 - 17h00");
    }

    #[test]
    fn sheet_hours_override_defaults() {
        let mut schedule = schedule_with_reception(ServiceStatus::Open, None);
        schedule.facility_opens_at = 10;
        schedule.facility_closes_at = 16;
        let status = resolve_facility_status(&at(2026, 1, 9, 9), Some(&schedule), &defaults());
        assert!(!status.is_open_now);
        assert_eq!(status.next_change, "Ouvre à 10h aujourd'hui");
        assert_eq!(status.hours, "10h – 16h");
    }

    #[test]
    fn special_message_overrides_display_only() {
        let mut schedule = schedule_with_reception(ServiceStatus::Open, None);
        schedule.facility_message = Some("Fermeture exceptionnelle mardi".to_string());
        let status = resolve_facility_status(&at(2026, 1, 9, 10), Some(&schedule), &defaults());
        // Still computed as open; only the message changes.
        assert!(status.is_open_now);
        assert_eq!(status.next_change, "Fermeture exceptionnelle mardi");
    }

    #[test]
    fn blank_special_message_is_ignored() {
        let mut schedule = schedule_with_reception(ServiceStatus::Open, None);
        schedule.facility_message = Some("  ".to_string());
        let status = resolve_facility_status(&at(2026, 1, 9, 10), Some(&schedule), &defaults());
        assert_eq!(status.next_change, "Ferme à 17h");
    }

    #[test]
    fn days_until_saturday_formula() {
        assert_eq!(days_until_saturday(Weekday::Sun), 6);
        assert_eq!(days_until_saturday(Weekday::Mon), 5);
        assert_eq!(days_until_saturday(Weekday::Fri), 1);
        assert_eq!(days_until_saturday(Weekday::Sat), 7);
    }
}
