//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer.
///
/// Every network-facing service catches these locally: a weather failure
/// becomes a degraded weather card, an exhausted provider chain becomes the
/// demo snapshot. Nothing propagates to a global failure surface.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request exceeded its deadline
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Transport failure or non-OK status
    #[error("Network request failed: {0}")]
    Network(String),

    /// Malformed or implausible response body
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Every provider in the fallback chain failed
    #[error("No conditions provider available")]
    NoProviderAvailable,
}

impl ApplicationError {
    /// Whether the failure came from the wire rather than from our own logic
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_carries_deadline() {
        let err = ApplicationError::Timeout { timeout_secs: 9 };
        assert_eq!(err.to_string(), "Request timed out after 9 seconds");
        assert!(err.is_network());
    }

    #[test]
    fn payload_errors_are_not_network() {
        let err = ApplicationError::InvalidPayload("short body".to_string());
        assert!(!err.is_network());
    }
}
