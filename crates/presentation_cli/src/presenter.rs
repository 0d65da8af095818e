//! Text presenter
//!
//! Pure projection of the domain values onto named display regions. The
//! core services never touch this module, and nothing here fetches: every
//! function takes plain data and returns text, so the whole layer is
//! testable without a network.

use application::LoadedConditions;
use domain::{
    ConditionsSnapshot, FacilityStatus, PriceQuote, RoadReport, Trail, WeatherSummary,
};

/// One named display region of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub body: String,
}

impl Region {
    fn new(name: &'static str, body: impl Into<String>) -> Self {
        Self {
            name,
            body: body.into(),
        }
    }
}

/// Render a set of regions as a text page
#[must_use]
pub fn render_page(regions: &[Region]) -> String {
    let mut out = String::new();
    for region in regions {
        out.push_str("── ");
        out.push_str(region.name);
        out.push_str(" ──\n");
        out.push_str(&region.body);
        if !region.body.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Regions for the conditions page: status banner, zones, trails, counter.
#[must_use]
pub fn conditions_regions(loaded: &LoadedConditions) -> Vec<Region> {
    let snapshot = &loaded.snapshot;
    let mut regions = Vec::new();

    if loaded.is_demo() {
        regions.push(Region::new(
            "notice",
            "⚠️ Données hors ligne — affichage exemple",
        ));
    }

    let status = &snapshot.domain_status;
    regions.push(Region::new(
        "statut-domaine",
        format!(
            "{} {}\n{}",
            status.icon(),
            status.label(),
            snapshot.grooming_label()
        ),
    ));

    if let Some(message) = &snapshot.special_message {
        regions.push(Region::new("message-special", message.clone()));
    }

    regions.push(Region::new("zones-neige", zones_body(snapshot)));
    regions.push(Region::new("pistes", trails_body(&snapshot.trails)));

    if !snapshot.trails.is_empty() {
        let count = snapshot.trail_count();
        regions.push(Region::new(
            "compteur-pistes",
            format!(
                "Ouvertes : {} · Fermées : {} · Total : {}\nTaux d'ouverture — {}%",
                count.open, count.closed, count.total, count.open_rate_pct
            ),
        ));
    }

    regions
}

fn zones_body(snapshot: &ConditionsSnapshot) -> String {
    if snapshot.snow_zones.is_empty() {
        return "Données non disponibles pour le moment.".to_string();
    }
    snapshot
        .snow_zones
        .iter()
        .map(|zone| {
            format!(
                "{} : {} cm — {} {}",
                zone.name, zone.depth_cm, zone.quality, zone.trend
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn trails_body(trails: &[Trail]) -> String {
    if trails.is_empty() {
        return "Aucune donnée disponible.".to_string();
    }
    trails
        .iter()
        .map(|trail| {
            let discipline = if trail.discipline.is_empty() {
                "—"
            } else {
                &trail.discipline
            };
            let km = trail
                .length_km
                .as_ref()
                .map_or_else(|| "—".to_string(), |km| format!("{km} km"));
            let mut line = format!(
                "{} {} · {} · {} · {} {} · {}",
                trail.difficulty.marker(),
                trail.name,
                trail.difficulty.label(),
                discipline,
                trail.status.icon(),
                trail.status.label(),
                km
            );
            if let Some(notes) = &trail.notes {
                line.push_str(" · ");
                line.push_str(notes);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Foyer live-status region
#[must_use]
pub fn facility_region(status: &FacilityStatus) -> Region {
    Region::new(
        "foyer",
        format!(
            "{}\n{} · Weekends & Vacances scolaires\n{}",
            status.banner_label(),
            status.hours,
            status.next_change
        ),
    )
}

/// Access-road region
#[must_use]
pub fn road_region(report: &RoadReport) -> Region {
    Region::new("etat-route", format!("{} {}", report.icon(), report.text))
}

/// Regions for the weather card, context bar, and forecast strip
#[must_use]
pub fn weather_regions(summary: &WeatherSummary) -> Vec<Region> {
    let mut regions = vec![Region::new(
        "meteo",
        format!(
            "{} {}\n{}°C · {:.1} mm · {} km/h · {}%",
            summary.code.icon(),
            summary.code.label(),
            summary.temperature_c.round(),
            summary.precipitation_mm,
            summary.wind_kmh.round(),
            summary.humidity_pct
        ),
    )];

    regions.push(Region::new("neige-24h", summary.snow_24h_label()));

    regions.push(Region::new(
        "isotherme",
        summary
            .freeze_level
            .as_ref()
            .map_or_else(|| "—".to_string(), domain::FreezeLevel::message),
    ));

    regions.push(Region::new(
        "qualite-neige",
        summary.snow_quality.to_string(),
    ));

    regions.push(Region::new("previsions-48h", summary.outlook_48h.message()));

    let strip = summary
        .daily
        .iter()
        .map(|day| {
            format!(
                "{} {} {}° / {}° {}",
                day.label,
                day.code.icon(),
                day.temp_max_c.round(),
                day.temp_min_c.round(),
                day.precip.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    regions.push(Region::new("previsions-5j", strip));

    regions
}

/// Degraded weather card shown when the API is unreachable
#[must_use]
pub fn weather_unavailable_region() -> Region {
    Region::new(
        "meteo",
        "⚠️ Météo indisponible\nVérifiez votre connexion ou réessayez",
    )
}

/// Calculator panel: amount plus detail, or the inline unavailable message
#[must_use]
pub fn quote_region(quote: Option<&PriceQuote>) -> Region {
    match quote {
        Some(quote) => Region::new(
            "calculateur",
            format!("{}\n{}", quote.amount_label(), quote.detail),
        ),
        None => Region::new("calculateur", "—\nCombinaison non disponible"),
    }
}

/// What the webcam panel currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebcamView {
    /// No probe has completed yet
    #[default]
    Unknown,
    /// Last probe returned a fresh frame
    Live { bytes: usize },
    /// Last probe failed; the fallback panel is shown
    Unavailable,
}

/// Webcam region: live frame info or the fallback text
#[must_use]
pub fn webcam_region(view: WebcamView) -> Region {
    let body = match view {
        WebcamView::Unknown => "Webcam : chargement…".to_string(),
        WebcamView::Live { bytes } => {
            format!("Webcam en direct ({} Ko)", bytes / 1024)
        },
        WebcamView::Unavailable => "Webcam momentanément indisponible".to_string(),
    };
    Region::new("webcam", body)
}
