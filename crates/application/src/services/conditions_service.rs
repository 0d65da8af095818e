//! Conditions fallback chain
//!
//! Tries an ordered list of providers until one yields a snapshot. Each
//! provider is a fallback for the previous one's failure, so attempts run
//! strictly sequentially and the first success short-circuits the rest.
//! When the whole chain fails the built-in demo snapshot is served and the
//! origin tells the presenter to show the offline notice.

use std::sync::Arc;

use domain::ConditionsSnapshot;
use tracing::{info, warn};

use crate::error::ApplicationError;
use crate::ports::{ConditionsProvider, SnapshotOrigin};

/// A snapshot together with the source that produced it
#[derive(Debug, Clone)]
pub struct LoadedConditions {
    pub snapshot: ConditionsSnapshot,
    pub origin: SnapshotOrigin,
}

impl LoadedConditions {
    /// True when the chain was exhausted and demo data is being shown
    #[must_use]
    pub const fn is_demo(&self) -> bool {
        !self.origin.is_live()
    }
}

/// Orchestrator over the ordered provider chain
pub struct ConditionsService {
    /// Fast single-source provider for the landing-page status
    quick: Arc<dyn ConditionsProvider>,
    /// Full fallback chain, in priority order
    chain: Vec<Arc<dyn ConditionsProvider>>,
}

impl std::fmt::Debug for ConditionsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionsService")
            .field("chain_len", &self.chain.len())
            .finish_non_exhaustive()
    }
}

impl ConditionsService {
    #[must_use]
    pub fn new(quick: Arc<dyn ConditionsProvider>, chain: Vec<Arc<dyn ConditionsProvider>>) -> Self {
        Self { quick, chain }
    }

    /// Try every provider in order; error only when all of them failed.
    pub async fn load_live(&self) -> Result<LoadedConditions, ApplicationError> {
        for provider in &self.chain {
            match provider.attempt().await {
                Ok(snapshot) => {
                    info!(origin = %provider.origin(), "conditions loaded");
                    return Ok(LoadedConditions {
                        snapshot,
                        origin: provider.origin(),
                    });
                },
                Err(e) => {
                    warn!(origin = %provider.origin(), error = %e, "conditions provider failed");
                },
            }
        }
        Err(ApplicationError::NoProviderAvailable)
    }

    /// Load conditions, falling back to the demo snapshot when every
    /// provider failed. Never errors: degraded mode is a display state,
    /// not a failure.
    pub async fn load(&self) -> LoadedConditions {
        match self.load_live().await {
            Ok(loaded) => loaded,
            Err(_) => {
                warn!("all conditions providers failed, serving demo data");
                LoadedConditions {
                    snapshot: ConditionsSnapshot::demo(),
                    origin: SnapshotOrigin::Demo,
                }
            },
        }
    }

    /// Single fast attempt against the primary source, used at startup for
    /// the facility and road panels. `None` means "resolve from the clock
    /// alone".
    pub async fn quick_status(&self) -> Option<ConditionsSnapshot> {
        match self.quick.attempt().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "quick status fetch failed, falling back to local clock");
                None
            },
        }
    }
}
