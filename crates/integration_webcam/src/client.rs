//! Webcam HTTP probe

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::WebcamConfig;
use crate::error::WebcamError;

/// A successfully fetched webcam frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebcamFrame {
    /// Frame size in bytes
    pub bytes: usize,
    /// Cache-busting token the frame was requested with
    pub cache_token: u64,
}

/// HTTP client probing the webcam image
#[derive(Debug)]
pub struct WebcamClient {
    client: Client,
    config: WebcamConfig,
}

impl WebcamClient {
    /// Create a new webcam client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WebcamConfig) -> Result<Self, WebcamError> {
        let client = Client::builder()
            .build()
            .map_err(|e| WebcamError::RequestFailed(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Fetch a fresh frame. The `t` query parameter defeats intermediary
    /// caches so each probe observes the camera's current state.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> Result<WebcamFrame, WebcamError> {
        let timeout_secs = self.config.timeout_secs;
        let cache_token = unix_millis();

        let response = self
            .client
            .get(&self.config.image_url)
            .query(&[("t", cache_token.to_string())])
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WebcamError::Timeout { timeout_secs }
                } else {
                    WebcamError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebcamError::RequestFailed(format!("HTTP {status}")));
        }

        if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            let value = content_type.to_str().unwrap_or("");
            if !value.starts_with("image/") {
                return Err(WebcamError::NotAnImage(value.to_string()));
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WebcamError::RequestFailed(e.to_string()))?;
        debug!(bytes = body.len(), "webcam frame fetched");

        Ok(WebcamFrame {
            bytes: body.len(),
            cache_token,
        })
    }
}

/// Milliseconds since the Unix epoch, used as the cache-busting token
fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
