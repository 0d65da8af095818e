//! Weather summary for the snow page

use serde::{Deserialize, Serialize};

use crate::value_objects::{FreezeBand, SnowQuality, WeatherCode};

/// 0 °C isotherm reading, already classified against the site elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeLevel {
    /// Rounded isotherm altitude in meters
    pub altitude_m: i32,
    pub band: FreezeBand,
}

impl FreezeLevel {
    /// Line shown on the context bar, e.g. "2 150 m ✅ Neige froide garantie"
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} m {}", group_thousands(self.altitude_m), self.band.message())
    }
}

/// French-style thousands grouping with a narrow space ("2 150")
fn group_thousands(value: i32) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Expected snowfall over the next 48 hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SnowOutlook {
    pub today_cm: f32,
    pub tomorrow_cm: f32,
}

impl SnowOutlook {
    #[must_use]
    pub fn message(&self) -> String {
        if self.today_cm > 0.0 || self.tomorrow_cm > 0.0 {
            format!(
                "Auj. : +{:.0} cm · Dem. : +{:.0} cm",
                self.today_cm, self.tomorrow_cm
            )
        } else {
            "Aucune chute prévue dans les 48h".to_string()
        }
    }
}

/// Precipitation expected on a forecast day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrecipForecast {
    /// Snowfall in centimeters (takes precedence over rain)
    Snow(f32),
    /// Rain in millimeters
    Rain(f32),
    #[default]
    None,
}

impl PrecipForecast {
    /// Snowfall text wins over rain text; a dash when both are zero.
    #[must_use]
    pub fn from_daily(snow_cm: f32, rain_mm: f32) -> Self {
        if snow_cm > 0.0 {
            Self::Snow(snow_cm)
        } else if rain_mm > 0.0 {
            Self::Rain(rain_mm)
        } else {
            Self::None
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Snow(cm) => format!("❄ +{cm:.0} cm"),
            Self::Rain(mm) => format!("🌧 {mm:.0} mm"),
            Self::None => "—".to_string(),
        }
    }
}

/// One row of the 5-day forecast strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// "Auj.", "Dem." or the weekday abbreviation
    pub label: String,
    pub code: WeatherCode,
    pub temp_max_c: f32,
    pub temp_min_c: f32,
    pub precip: PrecipForecast,
}

/// Everything the snow page needs from the weather API, one refresh worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature_c: f32,
    pub precipitation_mm: f32,
    pub wind_kmh: f32,
    pub humidity_pct: u8,
    pub code: WeatherCode,
    /// Snow accumulated over the last 24 hours, in centimeters
    pub snow_24h_cm: f32,
    /// Absent when the API returns no freeze-level data
    pub freeze_level: Option<FreezeLevel>,
    pub snow_quality: SnowQuality,
    pub outlook_48h: SnowOutlook,
    pub daily: Vec<ForecastDay>,
}

impl WeatherSummary {
    /// 24 h snow line: depths under a millimeter display as zero
    #[must_use]
    pub fn snow_24h_label(&self) -> String {
        if self.snow_24h_cm > 0.1 {
            format!("{:.1} cm", self.snow_24h_cm)
        } else {
            "0 cm".to_string()
        }
    }
}
