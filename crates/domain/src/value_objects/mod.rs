//! Value Objects - Immutable, identity-less domain primitives

mod domain_status;
mod freeze_band;
mod road;
mod service_status;
mod snow_quality;
mod snow_trend;
mod trail_difficulty;
mod trail_status;
mod weather_code;

pub use domain_status::DomainStatus;
pub use freeze_band::FreezeBand;
pub use road::{RoadReport, RoadSeverity, DEFAULT_ROAD_ADVISORY};
pub use service_status::ServiceStatus;
pub use snow_quality::SnowQuality;
pub use snow_trend::SnowTrend;
pub use trail_difficulty::TrailDifficulty;
pub use trail_status::TrailStatus;
pub use weather_code::WeatherCode;
