//! Composition root
//!
//! Builds every client, adapter, and service from the loaded configuration.
//! All configuration flows through constructors here; nothing reads
//! ambient globals.

use std::sync::Arc;

use application::{
    CalculatorSession, ConditionsService, FacilityDefaults, OnceFlag, WeatherService,
};
use chrono::{DateTime, Utc};
use chrono_tz::Europe::Paris;
use chrono_tz::Tz;
use domain::TariffTable;
use integration_sheet::SheetClient;
use integration_weather::OpenMeteoClient;
use integration_webcam::WebcamClient;

use crate::adapters::{SheetProviderAdapter, SheetRoute, WeatherAdapter};
use crate::config::{AppConfig, SiteConfig};

/// Everything the commands and background tasks share
#[derive(Debug)]
pub struct AppContext {
    pub site: SiteConfig,
    pub conditions: ConditionsService,
    pub weather: WeatherService,
    pub calculator: CalculatorSession,
    pub webcam: WebcamClient,
    pub facility_defaults: FacilityDefaults,
    /// Keeps the watch loop from being started twice
    pub watch_guard: OnceFlag,
    pub webcam_refresh_secs: u64,
}

impl AppContext {
    /// Wire up clients, adapters, and services.
    ///
    /// The provider chain order is the fallback order: Apps Script JSON,
    /// direct CSV export, gviz export, then the two relays.
    pub fn build(config: AppConfig) -> anyhow::Result<Self> {
        let sheet_client = Arc::new(SheetClient::new(config.sheet.clone())?);

        let quick = Arc::new(SheetProviderAdapter::new(
            Arc::clone(&sheet_client),
            SheetRoute::Quick,
        ));
        let chain: Vec<Arc<dyn application::ConditionsProvider>> = vec![
            Arc::new(SheetProviderAdapter::new(
                Arc::clone(&sheet_client),
                SheetRoute::Json,
            )),
            Arc::new(SheetProviderAdapter::new(
                Arc::clone(&sheet_client),
                SheetRoute::Export,
            )),
            Arc::new(SheetProviderAdapter::new(
                Arc::clone(&sheet_client),
                SheetRoute::Gviz,
            )),
            Arc::new(SheetProviderAdapter::new(
                Arc::clone(&sheet_client),
                SheetRoute::AllOrigins,
            )),
            Arc::new(SheetProviderAdapter::new(
                Arc::clone(&sheet_client),
                SheetRoute::CorsProxy,
            )),
        ];
        let conditions = ConditionsService::new(quick, chain);

        let weather_client = OpenMeteoClient::new(config.weather.clone())?;
        let weather = WeatherService::new(
            Arc::new(WeatherAdapter::new(weather_client)),
            config.weather.elevation_m,
        );

        let webcam = WebcamClient::new(config.webcam.clone())?;

        Ok(Self {
            facility_defaults: config.site.facility_defaults(),
            conditions,
            weather,
            calculator: CalculatorSession::new(TariffTable::standard()),
            webcam,
            watch_guard: OnceFlag::new(),
            webcam_refresh_secs: config.webcam.refresh_secs,
            site: config.site,
        })
    }

    /// Current time in the site's timezone
    #[must_use]
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&Paris)
    }
}
