//! Weather service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Open-Meteo client.
///
/// Coordinates and elevation describe the site the forecast is computed
/// for; the defaults point at the nordic area itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site latitude in decimal degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Site longitude in decimal degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Site elevation in meters, passed to the API for model correction
    #[serde(default = "default_elevation_m")]
    pub elevation_m: i32,

    /// Request timeout in seconds (default: 9)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 5)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// IANA timezone the daily series is aligned to
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_latitude() -> f64 {
    45.205
}

const fn default_longitude() -> f64 {
    5.965
}

const fn default_elevation_m() -> i32 {
    1400
}

const fn default_timeout() -> u64 {
    9
}

const fn default_forecast_days() -> u8 {
    5
}

fn default_timezone() -> String {
    "Europe/Paris".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            elevation_m: default_elevation_m(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
            timezone: default_timezone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_site() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert!((config.latitude - 45.205).abs() < f64::EPSILON);
        assert_eq!(config.elevation_m, 1400);
        assert_eq!(config.timeout_secs, 9);
        assert_eq!(config.forecast_days, 5);
        assert_eq!(config.timezone, "Europe/Paris");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"timeout_secs": 3}"#).expect("should deserialize");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.forecast_days, 5);
    }
}
