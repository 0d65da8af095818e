//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Hour outside the 0-23 range
    #[error("Invalid hour of day: {0}")]
    InvalidHour(u32),

    /// Unknown visitor profile
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// Unknown activity
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    /// Unknown duration
    #[error("Unknown duration: {0}")]
    UnknownDuration(String),
}
