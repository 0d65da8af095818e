//! Webcam probe errors

use thiserror::Error;

/// Errors that can occur while probing the webcam
#[derive(Debug, Error)]
pub enum WebcamError {
    /// Transport failure or non-OK status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded its deadline
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Response was not an image
    #[error("Unexpected content type: {0}")]
    NotAnImage(String),
}
