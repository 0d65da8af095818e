//! Application services

mod conditions_service;
mod facility;
mod session;
mod weather_service;

pub use conditions_service::{ConditionsService, LoadedConditions};
pub use facility::{resolve_facility_status, FacilityDefaults};
pub use session::{CalculatorSession, OnceFlag, Selection};
pub use weather_service::WeatherService;
