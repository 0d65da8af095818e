//! Open-Meteo weather integration for Nordique
//!
//! Fetches, in a single request, everything the snow page derives its
//! indicators from: current conditions, 24 h of hourly snowfall and
//! freeze-level height, and a 5-day daily forecast.

mod client;
mod config;
mod error;
mod models;

pub use client::{OpenMeteoClient, WeatherClient};
pub use config::WeatherConfig;
pub use error::WeatherError;
pub use models::{CurrentConditions, DailyConditions, SiteForecast};
