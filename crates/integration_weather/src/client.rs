//! Open-Meteo weather client
//!
//! One GET per refresh cycle, carrying the full query the snow page needs.
//! The request deadline is enforced per call; a timed-out request is
//! cancelled by the client, never retried here.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::{ApiResponse, CurrentConditions, DailyConditions, DailyData, SiteForecast};

/// Current-conditions fields requested from the API
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code,precipitation,snowfall";
/// Hourly fields: snowfall for the 24 h accumulation, freeze level for the
/// isotherm band
const HOURLY_FIELDS: &str = "snowfall,freezing_level_height";
/// Daily fields for the 5-day strip and the 48 h outlook
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,snowfall_sum,precipitation_sum";

/// Weather client trait for fetching the site forecast
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions plus hourly and daily series
    async fn fetch_forecast(&self) -> Result<SiteForecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range or the HTTP
    /// client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        Self::validate_coordinates(config.latitude, config.longitude)?;
        let client = Client::builder()
            .build()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url)
    }

    fn parse_daily(daily: &DailyData) -> Result<Vec<DailyConditions>, WeatherError> {
        let mut days = Vec::with_capacity(daily.time.len());
        for i in 0..daily.time.len() {
            let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("Invalid date: {e}")))?;
            let weather_code = daily
                .weather_code
                .get(i)
                .copied()
                .ok_or(WeatherError::MissingData("daily.weather_code"))?;
            let temp_max_c = daily
                .temperature_2m_max
                .get(i)
                .copied()
                .ok_or(WeatherError::MissingData("daily.temperature_2m_max"))?;
            let temp_min_c = daily
                .temperature_2m_min
                .get(i)
                .copied()
                .ok_or(WeatherError::MissingData("daily.temperature_2m_min"))?;
            let series_value =
                |series: &Option<Vec<Option<f32>>>| series.as_ref().and_then(|s| s.get(i).copied()).flatten();

            days.push(DailyConditions {
                date,
                weather_code,
                temp_max_c,
                temp_min_c,
                snowfall_sum_cm: series_value(&daily.snowfall_sum),
                precipitation_sum_mm: series_value(&daily.precipitation_sum),
            });
        }
        Ok(days)
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn fetch_forecast(&self) -> Result<SiteForecast, WeatherError> {
        let timeout_secs = self.config.timeout_secs;
        let url = self.forecast_url();
        debug!(url = %url, "Fetching site forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", self.config.latitude.to_string()),
                ("longitude", self.config.longitude.to_string()),
                ("elevation", self.config.elevation_m.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", self.config.timezone.clone()),
                ("forecast_days", self.config.forecast_days.clamp(1, 16).to_string()),
                ("wind_speed_unit", "kmh".to_string()),
            ])
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout { timeout_secs }
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current = api_response
            .current
            .ok_or(WeatherError::MissingData("current"))?;
        let daily = api_response
            .daily
            .ok_or(WeatherError::MissingData("daily"))?;
        let hourly = api_response.hourly.unwrap_or_default();

        Ok(SiteForecast {
            current: CurrentConditions {
                temperature_c: current.temperature_2m,
                humidity_pct: current.relative_humidity_2m,
                wind_kmh: current.wind_speed_10m,
                weather_code: current.weather_code,
                precipitation_mm: current.precipitation.unwrap_or(0.0),
                snowfall_cm: current.snowfall.unwrap_or(0.0),
            },
            hourly_snowfall_cm: hourly.snowfall,
            freezing_level_m: hourly.freezing_level_height,
            daily: Self::parse_daily(&daily)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_coordinates_valid() {
        assert!(OpenMeteoClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(45.205, 5.965).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(-90.0, -180.0).is_ok());
    }

    #[test]
    fn validate_coordinates_invalid() {
        assert!(OpenMeteoClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, 181.0).is_err());
    }

    #[test]
    fn client_rejects_bad_config() {
        let config = WeatherConfig {
            latitude: 123.0,
            ..Default::default()
        };
        assert!(matches!(
            OpenMeteoClient::new(config),
            Err(WeatherError::InvalidCoordinates)
        ));
    }

    #[test]
    fn parse_daily_maps_series_by_index() {
        let daily = DailyData {
            time: vec!["2026-01-12".to_string(), "2026-01-13".to_string()],
            weather_code: vec![73, 3],
            temperature_2m_max: vec![-2.0, 1.0],
            temperature_2m_min: vec![-9.0, -4.0],
            snowfall_sum: Some(vec![Some(12.0), None]),
            precipitation_sum: Some(vec![Some(14.0), Some(0.0)]),
        };
        let days = OpenMeteoClient::parse_daily(&daily).expect("should parse");
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].snowfall_sum_cm, Some(12.0));
        assert_eq!(days[1].snowfall_sum_cm, None);
        assert_eq!(days[1].precipitation_sum_mm, Some(0.0));
    }

    #[test]
    fn parse_daily_rejects_bad_dates() {
        let daily = DailyData {
            time: vec!["12/01/2026".to_string()],
            weather_code: vec![73],
            temperature_2m_max: vec![-2.0],
            temperature_2m_min: vec![-9.0],
            snowfall_sum: None,
            precipitation_sum: None,
        };
        assert!(matches!(
            OpenMeteoClient::parse_daily(&daily),
            Err(WeatherError::ParseError(_))
        ));
    }
}
