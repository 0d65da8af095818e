//! Domain entities - condition snapshots and derived reports

mod conditions;
mod facility;
mod tariff;
mod weather;

pub use conditions::{ConditionsSnapshot, ServiceEntry, SnowZone, Trail, TrailCount};
pub use facility::FacilityStatus;
pub use tariff::{Activity, Duration, PriceQuote, Profile, TariffTable};
pub use weather::{ForecastDay, FreezeLevel, PrecipForecast, SnowOutlook, WeatherSummary};
