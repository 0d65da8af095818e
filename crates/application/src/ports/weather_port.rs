//! Weather service port
//!
//! Defines the interface for mountain weather retrieval: current
//! conditions, 24 h of hourly snowfall and freeze-level readings, and a
//! 5-day daily forecast. Hourly and daily series keep missing entries as
//! `None`; the summary derivation decides what absence means.

use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current conditions at the site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainObservation {
    /// Air temperature in Celsius
    pub temperature_c: f32,
    /// Precipitation in mm
    pub precipitation_mm: f32,
    /// Wind speed in km/h
    pub wind_kmh: f32,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// WMO weather code
    pub weather_code: u8,
}

/// Daily forecast values for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub weather_code: u8,
    pub temp_max_c: f32,
    pub temp_min_c: f32,
    /// Total snowfall in cm, absent when the API omits it
    pub snowfall_cm: Option<f32>,
    /// Total precipitation in mm
    pub precipitation_mm: Option<f32>,
}

/// Complete weather payload for one refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountainForecast {
    pub current: MountainObservation,
    /// Hourly snowfall in cm, starting at the current hour
    pub hourly_snowfall_cm: Vec<Option<f32>>,
    /// Hourly 0 °C isotherm altitude in meters
    pub freezing_level_m: Vec<Option<f32>>,
    pub daily: Vec<DailyOutlook>,
}

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions plus the hourly and daily series
    async fn fetch_forecast(&self) -> Result<MountainForecast, ApplicationError>;
}
