//! Weather client errors

use thiserror::Error;

/// Errors that can occur while fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Request to the weather service failed (transport or non-OK status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded its deadline
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response parsed but lacks a required section
    #[error("Missing data in response: {0}")]
    MissingData(&'static str),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}
