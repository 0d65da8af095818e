//! Weather data models
//!
//! Raw Open-Meteo response shapes plus the parsed forecast handed to the
//! application layer. Hourly and daily series keep `null` entries as
//! `None`; deciding what absence means is the summary builder's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current conditions at the site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in Celsius
    pub temperature_c: f32,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Wind speed in km/h
    pub wind_kmh: f32,
    /// WMO weather code
    pub weather_code: u8,
    /// Precipitation in mm
    pub precipitation_mm: f32,
    /// Snowfall in cm
    pub snowfall_cm: f32,
}

/// One day of the daily forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyConditions {
    pub date: NaiveDate,
    pub weather_code: u8,
    pub temp_max_c: f32,
    pub temp_min_c: f32,
    /// Total snowfall in cm, when the model provides it
    pub snowfall_sum_cm: Option<f32>,
    /// Total precipitation in mm
    pub precipitation_sum_mm: Option<f32>,
}

/// Complete parsed forecast for the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteForecast {
    pub current: CurrentConditions,
    /// Hourly snowfall in cm, starting at the current hour
    pub hourly_snowfall_cm: Vec<Option<f32>>,
    /// Hourly 0 °C isotherm altitude in meters
    pub freezing_level_m: Vec<Option<f32>>,
    pub daily: Vec<DailyConditions>,
}

/// Raw `current` block from the API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentData {
    pub temperature_2m: f32,
    pub relative_humidity_2m: u8,
    pub wind_speed_10m: f32,
    pub weather_code: u8,
    #[serde(default)]
    pub precipitation: Option<f32>,
    #[serde(default)]
    pub snowfall: Option<f32>,
}

/// Raw `hourly` block from the API
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct HourlyData {
    #[serde(default)]
    pub snowfall: Vec<Option<f32>>,
    #[serde(default)]
    pub freezing_level_height: Vec<Option<f32>>,
}

/// Raw `daily` block from the API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<u8>,
    pub temperature_2m_max: Vec<f32>,
    pub temperature_2m_min: Vec<f32>,
    #[serde(default)]
    pub snowfall_sum: Option<Vec<Option<f32>>>,
    #[serde(default)]
    pub precipitation_sum: Option<Vec<Option<f32>>>,
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    pub current: Option<CurrentData>,
    #[serde(default)]
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_block_tolerates_nulls() {
        let raw = r#"{"snowfall": [0.5, null, 1.2], "freezing_level_height": [null]}"#;
        let hourly: HourlyData = serde_json::from_str(raw).expect("should deserialize");
        assert_eq!(hourly.snowfall, vec![Some(0.5), None, Some(1.2)]);
        assert_eq!(hourly.freezing_level_height, vec![None]);
    }

    #[test]
    fn current_block_defaults_optional_fields() {
        let raw = r#"{
            "temperature_2m": -3.5,
            "relative_humidity_2m": 88,
            "wind_speed_10m": 14.0,
            "weather_code": 71
        }"#;
        let current: CurrentData = serde_json::from_str(raw).expect("should deserialize");
        assert!(current.precipitation.is_none());
        assert!(current.snowfall.is_none());
    }

    #[test]
    fn daily_block_without_sums_deserializes() {
        let raw = r#"{
            "time": ["2026-01-12"],
            "weather_code": [73],
            "temperature_2m_max": [-2.0],
            "temperature_2m_min": [-9.0]
        }"#;
        let daily: DailyData = serde_json::from_str(raw).expect("should deserialize");
        assert!(daily.snowfall_sum.is_none());
        assert!(daily.precipitation_sum.is_none());
    }
}
