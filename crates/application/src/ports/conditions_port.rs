//! Conditions provider port
//!
//! One provider per external data source, attempted in order by the
//! fallback chain (chain of responsibility). Each attempt is independent;
//! the orchestrator decides what a failure means.

use async_trait::async_trait;
use domain::ConditionsSnapshot;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApplicationError;

/// Which source produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOrigin {
    /// Apps Script JSON endpoint (the preferred source)
    AppsScript,
    /// Direct CSV export of the sheet
    DirectExport,
    /// gviz CSV export of the sheet
    GvizExport,
    /// AllOrigins relay wrapping the gviz export
    AllOriginsProxy,
    /// CORS relay wrapping the gviz export
    CorsProxy,
    /// Built-in demonstration data, shown when every provider failed
    Demo,
}

impl SnapshotOrigin {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AppsScript => "apps-script",
            Self::DirectExport => "csv-export",
            Self::GvizExport => "gviz-export",
            Self::AllOriginsProxy => "allorigins-proxy",
            Self::CorsProxy => "cors-proxy",
            Self::Demo => "demo",
        }
    }

    /// Demo data is the only origin that is not live
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !matches!(self, Self::Demo)
    }
}

impl fmt::Display for SnapshotOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Port for one conditions data source.
///
/// `attempt` either yields a full snapshot or an error the chain logs and
/// swallows; providers never fall back internally.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConditionsProvider: Send + Sync {
    /// Identity of this source, for logging and the degraded-mode notice
    fn origin(&self) -> SnapshotOrigin;

    /// Try to produce a snapshot from this source
    async fn attempt(&self) -> Result<ConditionsSnapshot, ApplicationError>;
}
