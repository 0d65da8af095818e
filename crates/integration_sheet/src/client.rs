//! HTTP client for the sheet routes
//!
//! One method per route. Every method performs a single attempt with its
//! own deadline and returns a fully decoded snapshot; no method falls back
//! to another route, since ordering and retries belong to the application chain.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use domain::ConditionsSnapshot;

use crate::config::SheetConfig;
use crate::csv::CsvGrid;
use crate::error::SheetError;
use crate::extract::snapshot_from_grid;
use crate::json::snapshot_from_json;

/// Minimum plausible length of a real CSV export. Shorter bodies are
/// error pages or empty exports served with a 200 status.
const MIN_CSV_PAYLOAD_LEN: usize = 80;

/// AllOrigins wraps the proxied body in a JSON envelope
#[derive(Debug, Deserialize)]
struct AllOriginsEnvelope {
    contents: Option<String>,
}

/// Client for every route to the conditions sheet
#[derive(Debug)]
pub struct SheetClient {
    client: Client,
    config: SheetConfig,
}

impl SheetClient {
    /// Create a new sheet client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: SheetConfig) -> Result<Self, SheetError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SheetError::RequestFailed(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Full Apps Script fetch (preferred source)
    #[instrument(skip(self))]
    pub async fn fetch_json_snapshot(&self) -> Result<ConditionsSnapshot, SheetError> {
        self.fetch_apps_script(self.config.json_timeout_secs).await
    }

    /// Fast Apps Script fetch for the landing-page status panels
    #[instrument(skip(self))]
    pub async fn fetch_quick_snapshot(&self) -> Result<ConditionsSnapshot, SheetError> {
        self.fetch_apps_script(self.config.quick_timeout_secs).await
    }

    async fn fetch_apps_script(&self, timeout_secs: u64) -> Result<ConditionsSnapshot, SheetError> {
        let body = self
            .fetch_text(&self.config.apps_script_url, &[], timeout_secs)
            .await?;
        snapshot_from_json(&body, &self.config)
    }

    /// Direct CSV export route
    #[instrument(skip(self))]
    pub async fn fetch_export_snapshot(&self) -> Result<ConditionsSnapshot, SheetError> {
        let body = self
            .fetch_text(&self.config.export_csv_url(), &[], self.config.csv_timeout_secs)
            .await?;
        self.decode_csv(&body)
    }

    /// gviz CSV export route
    #[instrument(skip(self))]
    pub async fn fetch_gviz_snapshot(&self) -> Result<ConditionsSnapshot, SheetError> {
        let body = self
            .fetch_text(&self.config.gviz_csv_url(), &[], self.config.csv_timeout_secs)
            .await?;
        self.decode_csv(&body)
    }

    /// AllOrigins relay around the gviz export. The relay answers 200 with
    /// a JSON envelope whose `contents` field holds the proxied body.
    #[instrument(skip(self))]
    pub async fn fetch_allorigins_snapshot(&self) -> Result<ConditionsSnapshot, SheetError> {
        let target = self.config.gviz_csv_url();
        let body = self
            .fetch_text(
                &self.config.allorigins_url,
                &[("url", target.as_str())],
                self.config.proxy_timeout_secs,
            )
            .await?;
        let envelope: AllOriginsEnvelope =
            serde_json::from_str(&body).map_err(|e| SheetError::ParseError(e.to_string()))?;
        let contents = envelope
            .contents
            .ok_or_else(|| SheetError::ParseError("relay envelope without contents".to_string()))?;
        self.decode_csv(&contents)
    }

    /// CORS relay around the gviz export; passes the body through verbatim.
    #[instrument(skip(self))]
    pub async fn fetch_corsproxy_snapshot(&self) -> Result<ConditionsSnapshot, SheetError> {
        let target = self.config.gviz_csv_url();
        let body = self
            .fetch_text(
                &self.config.corsproxy_url,
                &[("url", target.as_str())],
                self.config.proxy_timeout_secs,
            )
            .await?;
        self.decode_csv(&body)
    }

    /// Plausibility-check a CSV payload, then decode and extract it.
    fn decode_csv(&self, payload: &str) -> Result<ConditionsSnapshot, SheetError> {
        let checked = plausible_csv(payload)?;
        let grid = CsvGrid::parse(checked);
        debug!(rows = grid.row_count(), "decoded sheet export");
        Ok(snapshot_from_grid(&grid, &self.config))
    }

    async fn fetch_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        timeout_secs: u64,
    ) -> Result<String, SheetError> {
        debug!(url = %url, timeout_secs, "fetching sheet route");
        let mut request = self
            .client
            .get(url)
            .timeout(std::time::Duration::from_secs(timeout_secs));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SheetError::Timeout { timeout_secs }
            } else {
                SheetError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| SheetError::RequestFailed(e.to_string()))
    }
}

/// Accept a candidate payload only if it is long enough to be a real
/// export and does not open with an HTML document tag; providers behind
/// a login wall answer 200 with an HTML page.
fn plausible_csv(payload: &str) -> Result<&str, SheetError> {
    if payload.trim_start().starts_with("<!") {
        return Err(SheetError::HtmlErrorPage);
    }
    if payload.len() <= MIN_CSV_PAYLOAD_LEN {
        return Err(SheetError::PayloadTooShort { len: payload.len() });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_page_is_rejected() {
        assert!(matches!(
            plausible_csv("<!DOCTYPE html><html>login required</html>"),
            Err(SheetError::HtmlErrorPage)
        ));
        assert!(matches!(
            plausible_csv("  <!doctype html>"),
            Err(SheetError::HtmlErrorPage)
        ));
    }

    #[test]
    fn short_payload_is_rejected() {
        let short = "a,b,c\n1,2,3";
        assert!(matches!(
            plausible_csv(short),
            Err(SheetError::PayloadTooShort { len }) if len == short.len()
        ));
    }

    #[test]
    fn boundary_length_is_still_too_short() {
        let payload = "x".repeat(MIN_CSV_PAYLOAD_LEN);
        assert!(plausible_csv(&payload).is_err());
        let payload = "x".repeat(MIN_CSV_PAYLOAD_LEN + 1);
        assert!(plausible_csv(&payload).is_ok());
    }

    #[test]
    fn plausible_payload_passes_through() {
        let payload = format!("Statut,OUVERT\n{}", "ligne,vide\n".repeat(10));
        assert!(plausible_csv(&payload).is_ok());
    }
}
