//! Application configuration
//!
//! One `AppConfig` aggregates the per-integration configurations plus the
//! handful of site constants. Everything has a built-in default matching
//! the production site, so the binary runs with no config file at all;
//! `config.toml` and `NORDIQUE_*` environment variables override it.

use application::FacilityDefaults;
use integration_sheet::SheetConfig;
use integration_weather::WeatherConfig;
use integration_webcam::WebcamConfig;
use serde::{Deserialize, Serialize};

/// Site-wide constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the nordic area
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Phone number shown in contact messages
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,

    /// Default foyer opening hour (0-23)
    #[serde(default = "default_foyer_open")]
    pub foyer_open: u32,

    /// Default foyer closing hour (0-23)
    #[serde(default = "default_foyer_close")]
    pub foyer_close: u32,

    /// Seconds between full data refreshes (default: 15 minutes)
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_site_name() -> String {
    "Espace Nordique du Barioz".to_string()
}

fn default_contact_phone() -> String {
    "04 76 71 06 47".to_string()
}

const fn default_foyer_open() -> u32 {
    9
}

const fn default_foyer_close() -> u32 {
    17
}

const fn default_refresh_secs() -> u64 {
    15 * 60
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            contact_phone: default_contact_phone(),
            foyer_open: default_foyer_open(),
            foyer_close: default_foyer_close(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl SiteConfig {
    /// Facility defaults handed to the status resolver
    #[must_use]
    pub fn facility_defaults(&self) -> FacilityDefaults {
        FacilityDefaults {
            opens_at: self.foyer_open,
            closes_at: self.foyer_close,
            contact_phone: self.contact_phone.clone(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub sheet: SheetConfig,

    #[serde(default)]
    pub webcam: WebcamConfig,
}

impl AppConfig {
    /// Load from `config.toml` (optional) with `NORDIQUE_*` environment
    /// overrides, on top of the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing config file or an override fails
    /// to deserialize. A missing file is not an error.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub(crate) fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("NORDIQUE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
