//! Webcam probe configuration

use serde::{Deserialize, Serialize};

/// Configuration for the webcam probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebcamConfig {
    /// URL of the published webcam frame
    #[serde(default = "default_image_url")]
    pub image_url: String,

    /// Request timeout in seconds (default: 8)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Seconds between probes (default: 60)
    #[serde(default = "default_refresh")]
    pub refresh_secs: u64,
}

fn default_image_url() -> String {
    "https://cretdupoulet.epok.network/camera/cret_du_poulet.jpg".to_string()
}

const fn default_timeout() -> u64 {
    8
}

const fn default_refresh() -> u64 {
    60
}

impl Default for WebcamConfig {
    fn default() -> Self {
        Self {
            image_url: default_image_url(),
            timeout_secs: default_timeout(),
            refresh_secs: default_refresh(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_summit_camera() {
        let config = WebcamConfig::default();
        assert!(config.image_url.ends_with(".jpg"));
        assert_eq!(config.refresh_secs, 60);
        assert_eq!(config.timeout_secs, 8);
    }
}
