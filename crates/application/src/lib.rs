//! Application layer - Use cases and orchestration
//!
//! Contains the provider fallback chain, the weather summary derivation,
//! the facility-status resolver, port definitions, and the calculator
//! session. Orchestrates domain objects and integration adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
