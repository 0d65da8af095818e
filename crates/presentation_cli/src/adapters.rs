//! Port adapters around the integration clients
//!
//! The integration crates know nothing about the application layer; these
//! adapters implement its ports at the composition root, mapping models
//! and errors across the boundary.

use std::sync::Arc;

use application::{
    ApplicationError, ConditionsProvider, DailyOutlook, MountainForecast, MountainObservation,
    SnapshotOrigin, WeatherPort,
};
use async_trait::async_trait;
use domain::ConditionsSnapshot;
use integration_sheet::{SheetClient, SheetError};
use integration_weather::{SiteForecast, WeatherClient, WeatherError};

/// Which sheet route an adapter drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRoute {
    /// Apps Script JSON, full timeout
    Json,
    /// Apps Script JSON, quick timeout (landing-page status)
    Quick,
    /// Direct CSV export
    Export,
    /// gviz CSV export
    Gviz,
    /// AllOrigins relay around the gviz export
    AllOrigins,
    /// CORS relay around the gviz export
    CorsProxy,
}

/// Adapter exposing one sheet route as a [`ConditionsProvider`]
pub struct SheetProviderAdapter {
    client: Arc<SheetClient>,
    route: SheetRoute,
}

impl std::fmt::Debug for SheetProviderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetProviderAdapter")
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

impl SheetProviderAdapter {
    #[must_use]
    pub fn new(client: Arc<SheetClient>, route: SheetRoute) -> Self {
        Self { client, route }
    }
}

#[async_trait]
impl ConditionsProvider for SheetProviderAdapter {
    fn origin(&self) -> SnapshotOrigin {
        match self.route {
            SheetRoute::Json | SheetRoute::Quick => SnapshotOrigin::AppsScript,
            SheetRoute::Export => SnapshotOrigin::DirectExport,
            SheetRoute::Gviz => SnapshotOrigin::GvizExport,
            SheetRoute::AllOrigins => SnapshotOrigin::AllOriginsProxy,
            SheetRoute::CorsProxy => SnapshotOrigin::CorsProxy,
        }
    }

    async fn attempt(&self) -> Result<ConditionsSnapshot, ApplicationError> {
        let result = match self.route {
            SheetRoute::Json => self.client.fetch_json_snapshot().await,
            SheetRoute::Quick => self.client.fetch_quick_snapshot().await,
            SheetRoute::Export => self.client.fetch_export_snapshot().await,
            SheetRoute::Gviz => self.client.fetch_gviz_snapshot().await,
            SheetRoute::AllOrigins => self.client.fetch_allorigins_snapshot().await,
            SheetRoute::CorsProxy => self.client.fetch_corsproxy_snapshot().await,
        };
        result.map_err(map_sheet_error)
    }
}

fn map_sheet_error(error: SheetError) -> ApplicationError {
    match error {
        SheetError::Timeout { timeout_secs } => ApplicationError::Timeout { timeout_secs },
        SheetError::RequestFailed(message) => ApplicationError::Network(message),
        SheetError::HtmlErrorPage
        | SheetError::PayloadTooShort { .. }
        | SheetError::MissingConditionsKeys => {
            ApplicationError::InvalidPayload(error.to_string())
        },
        SheetError::ParseError(message) => ApplicationError::InvalidPayload(message),
    }
}

/// Adapter exposing the Open-Meteo client as a [`WeatherPort`]
pub struct WeatherAdapter<C> {
    client: C,
}

impl<C> std::fmt::Debug for WeatherAdapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl<C: WeatherClient> WeatherAdapter<C> {
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: WeatherClient> WeatherPort for WeatherAdapter<C> {
    async fn fetch_forecast(&self) -> Result<MountainForecast, ApplicationError> {
        let forecast = self
            .client
            .fetch_forecast()
            .await
            .map_err(map_weather_error)?;
        Ok(map_forecast(forecast))
    }
}

fn map_forecast(forecast: SiteForecast) -> MountainForecast {
    MountainForecast {
        current: MountainObservation {
            temperature_c: forecast.current.temperature_c,
            precipitation_mm: forecast.current.precipitation_mm,
            wind_kmh: forecast.current.wind_kmh,
            humidity_pct: forecast.current.humidity_pct,
            weather_code: forecast.current.weather_code,
        },
        hourly_snowfall_cm: forecast.hourly_snowfall_cm,
        freezing_level_m: forecast.freezing_level_m,
        daily: forecast
            .daily
            .into_iter()
            .map(|day| DailyOutlook {
                date: day.date,
                weather_code: day.weather_code,
                temp_max_c: day.temp_max_c,
                temp_min_c: day.temp_min_c,
                snowfall_cm: day.snowfall_sum_cm,
                precipitation_mm: day.precipitation_sum_mm,
            })
            .collect(),
    }
}

fn map_weather_error(error: WeatherError) -> ApplicationError {
    match error {
        WeatherError::Timeout { timeout_secs } => ApplicationError::Timeout { timeout_secs },
        WeatherError::RequestFailed(message) | WeatherError::ServiceUnavailable(message) => {
            ApplicationError::Network(message)
        },
        WeatherError::ParseError(message) => ApplicationError::InvalidPayload(message),
        WeatherError::MissingData(section) => {
            ApplicationError::InvalidPayload(format!("missing section: {section}"))
        },
        WeatherError::InvalidCoordinates => {
            ApplicationError::InvalidPayload(error.to_string())
        },
    }
}
