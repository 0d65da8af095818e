//! Sheet integration configuration

use serde::{Deserialize, Serialize};

/// Configuration for the sheet-backed conditions sources.
///
/// The export and gviz URLs are derived from the sheet id and tab name;
/// the relay base URLs are configurable mostly so tests can point them at
/// a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Apps Script endpoint returning the conditions as JSON
    #[serde(default = "default_apps_script_url")]
    pub apps_script_url: String,

    /// Spreadsheet identifier
    #[serde(default = "default_sheet_id")]
    pub sheet_id: String,

    /// Name of the conditions tab
    #[serde(default = "default_sheet_tab")]
    pub sheet_tab: String,

    /// Base URL of the Google Sheets frontend
    #[serde(default = "default_sheets_base_url")]
    pub sheets_base_url: String,

    /// AllOrigins relay endpoint
    #[serde(default = "default_allorigins_url")]
    pub allorigins_url: String,

    /// CORS relay endpoint
    #[serde(default = "default_corsproxy_url")]
    pub corsproxy_url: String,

    /// Timeout for the full Apps Script fetch (default: 8)
    #[serde(default = "default_json_timeout")]
    pub json_timeout_secs: u64,

    /// Timeout for the quick-status Apps Script fetch (default: 5)
    #[serde(default = "default_quick_timeout")]
    pub quick_timeout_secs: u64,

    /// Timeout for the direct CSV exports (default: 5)
    #[serde(default = "default_csv_timeout")]
    pub csv_timeout_secs: u64,

    /// Timeout for the relay-wrapped exports (default: 8)
    #[serde(default = "default_proxy_timeout")]
    pub proxy_timeout_secs: u64,

    /// Foyer opening hour used when the sheet omits it
    #[serde(default = "default_opens_at")]
    pub default_opens_at: u32,

    /// Foyer closing hour used when the sheet omits it
    #[serde(default = "default_closes_at")]
    pub default_closes_at: u32,
}

fn default_apps_script_url() -> String {
    "https://script.google.com/macros/s/AKfycbyzpH3msOatusrPekH-1doTWO1xoUGrMWJgo2KTXVIi4vGuFlIF1TMV40uT8EFiWKSF/exec".to_string()
}

fn default_sheet_id() -> String {
    "1DPKFwYiECT1NEeNHAdjZnwYRcfeaWX4FdM6AX2x4U_E".to_string()
}

fn default_sheet_tab() -> String {
    "Conditions des Pistes".to_string()
}

fn default_sheets_base_url() -> String {
    "https://docs.google.com".to_string()
}

fn default_allorigins_url() -> String {
    "https://api.allorigins.win/get".to_string()
}

fn default_corsproxy_url() -> String {
    "https://corsproxy.io/".to_string()
}

const fn default_json_timeout() -> u64 {
    8
}

const fn default_quick_timeout() -> u64 {
    5
}

const fn default_csv_timeout() -> u64 {
    5
}

const fn default_proxy_timeout() -> u64 {
    8
}

const fn default_opens_at() -> u32 {
    9
}

const fn default_closes_at() -> u32 {
    17
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            apps_script_url: default_apps_script_url(),
            sheet_id: default_sheet_id(),
            sheet_tab: default_sheet_tab(),
            sheets_base_url: default_sheets_base_url(),
            allorigins_url: default_allorigins_url(),
            corsproxy_url: default_corsproxy_url(),
            json_timeout_secs: default_json_timeout(),
            quick_timeout_secs: default_quick_timeout(),
            csv_timeout_secs: default_csv_timeout(),
            proxy_timeout_secs: default_proxy_timeout(),
            default_opens_at: default_opens_at(),
            default_closes_at: default_closes_at(),
        }
    }
}

impl SheetConfig {
    /// Direct CSV export of the conditions tab
    #[must_use]
    pub fn export_csv_url(&self) -> String {
        format!(
            "{}/spreadsheets/d/{}/export?format=csv&sheet={}",
            self.sheets_base_url,
            self.sheet_id,
            encode_component(&self.sheet_tab)
        )
    }

    /// gviz CSV export of the conditions tab (different export path, same
    /// data; survives some sharing configurations the direct export does not)
    #[must_use]
    pub fn gviz_csv_url(&self) -> String {
        format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.sheets_base_url,
            self.sheet_id,
            encode_component(&self.sheet_tab)
        )
    }
}

/// Minimal percent-encoding for a URL path/query component
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
