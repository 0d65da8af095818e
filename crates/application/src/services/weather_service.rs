//! Weather summary derivation
//!
//! Turns the raw forecast payload into the `WeatherSummary` the snow page
//! renders: 24 h snow accumulation, freeze-level band against the site
//! elevation, temperature-banded snow quality, the 48 h outlook, and the
//! labeled 5-day strip.

use std::sync::Arc;

use chrono::{Datelike, Weekday};
use domain::{
    ForecastDay, FreezeBand, FreezeLevel, PrecipForecast, SnowOutlook, SnowQuality,
    WeatherCode, WeatherSummary,
};
use tracing::debug;

use crate::error::ApplicationError;
use crate::ports::{MountainForecast, WeatherPort};

/// Number of rows on the forecast strip
const FORECAST_DAYS: usize = 5;

/// Builds the weather summary from the configured port
pub struct WeatherService {
    port: Arc<dyn WeatherPort>,
    site_elevation_m: i32,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("site_elevation_m", &self.site_elevation_m)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    #[must_use]
    pub fn new(port: Arc<dyn WeatherPort>, site_elevation_m: i32) -> Self {
        Self {
            port,
            site_elevation_m,
        }
    }

    /// Fetch and derive. A failure here means the caller renders the
    /// "weather unavailable" card; nothing is retried.
    pub async fn summary(&self) -> Result<WeatherSummary, ApplicationError> {
        let forecast = self.port.fetch_forecast().await?;
        debug!(
            hourly = forecast.hourly_snowfall_cm.len(),
            daily = forecast.daily.len(),
            "deriving weather summary"
        );
        Ok(Self::derive(&forecast, self.site_elevation_m))
    }

    fn derive(forecast: &MountainForecast, site_elevation_m: i32) -> WeatherSummary {
        let current = forecast.current;

        // Missing hourly entries count as no snowfall.
        let snow_24h_cm: f32 = forecast
            .hourly_snowfall_cm
            .iter()
            .take(24)
            .map(|v| v.unwrap_or(0.0))
            .sum();

        #[allow(clippy::cast_possible_truncation)]
        let freeze_level = forecast
            .freezing_level_m
            .first()
            .copied()
            .flatten()
            .map(|altitude| {
                let altitude_m = altitude.round() as i32;
                FreezeLevel {
                    altitude_m,
                    band: FreezeBand::classify(altitude_m, site_elevation_m),
                }
            });

        let outlook_48h = SnowOutlook {
            today_cm: daily_snow(forecast, 0),
            tomorrow_cm: daily_snow(forecast, 1),
        };

        let daily = forecast
            .daily
            .iter()
            .take(FORECAST_DAYS)
            .enumerate()
            .map(|(i, day)| ForecastDay {
                label: day_label(i, day.date.weekday()),
                code: WeatherCode(day.weather_code),
                temp_max_c: day.temp_max_c,
                temp_min_c: day.temp_min_c,
                precip: PrecipForecast::from_daily(
                    day.snowfall_cm.unwrap_or(0.0),
                    day.precipitation_mm.unwrap_or(0.0),
                ),
            })
            .collect();

        WeatherSummary {
            temperature_c: current.temperature_c,
            precipitation_mm: current.precipitation_mm,
            wind_kmh: current.wind_kmh,
            humidity_pct: current.humidity_pct,
            code: WeatherCode(current.weather_code),
            snow_24h_cm,
            freeze_level,
            snow_quality: SnowQuality::from_temperature(current.temperature_c),
            outlook_48h,
            daily,
        }
    }
}

fn daily_snow(forecast: &MountainForecast, index: usize) -> f32 {
    forecast
        .daily
        .get(index)
        .and_then(|d| d.snowfall_cm)
        .unwrap_or(0.0)
}

/// "Auj." today, "Dem." tomorrow, weekday abbreviation beyond that
fn day_label(index: usize, weekday: Weekday) -> String {
    match index {
        0 => "Auj.".to_string(),
        1 => "Dem.".to_string(),
        _ => weekday_abbrev(weekday).to_string(),
    }
}

const fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mer",
        Weekday::Thu => "Jeu",
        Weekday::Fri => "Ven",
        Weekday::Sat => "Sam",
        Weekday::Sun => "Dim",
    }
}
