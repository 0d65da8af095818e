//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application reaches external
//! data sources. Adapters around the integration clients implement them at
//! the composition root.

mod conditions_port;
mod weather_port;

#[cfg(test)]
pub use conditions_port::MockConditionsProvider;
pub use conditions_port::{ConditionsProvider, SnapshotOrigin};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{DailyOutlook, MountainForecast, MountainObservation, WeatherPort};
