//! Sheet integration errors

use thiserror::Error;

/// Errors that can occur while fetching or decoding sheet data
#[derive(Debug, Error)]
pub enum SheetError {
    /// Transport failure or non-OK status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded its deadline
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Provider returned an HTML document where data was expected;
    /// typically a login or error page served with a 200 status
    #[error("Provider returned an HTML error page")]
    HtmlErrorPage,

    /// Payload too short to be a real export
    #[error("Payload too short to be sheet data ({len} bytes)")]
    PayloadTooShort { len: usize },

    /// Malformed response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON body carries none of the expected top-level keys
    #[error("Response carries no conditions data")]
    MissingConditionsKeys,
}
