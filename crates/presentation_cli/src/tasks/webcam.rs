//! Webcam probe loop
//!
//! Probes the camera every minute and flips the dashboard's webcam view.
//! Failures only change the displayed state; they are never fatal.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::context::AppContext;
use crate::presenter::WebcamView;
use crate::tasks::Dashboard;

/// Spawn the webcam probe loop. The first probe runs immediately.
pub fn spawn_webcam_task(
    ctx: Arc<AppContext>,
    board: Arc<Dashboard>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = interval.as_secs(),
        "starting webcam probe task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let view = match ctx.webcam.probe().await {
                Ok(frame) => WebcamView::Live { bytes: frame.bytes },
                Err(e) => {
                    debug!(error = %e, "webcam probe failed");
                    WebcamView::Unavailable
                },
            };
            let previous = board.webcam();
            board.set_webcam(view);
            if previous != view {
                info!(?view, "webcam state changed");
            }
        }
    })
}
