//! Periodic full refresh
//!
//! Re-runs the conditions chain and the weather fetch on a fixed interval,
//! publishing fresh snapshots into the dashboard. Cycles that would
//! overlap a still-running one are skipped rather than queued: the next
//! tick will pick up whatever the slow cycle missed.

use std::sync::Arc;
use std::time::Duration;

use domain::RoadReport;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::presenter::{
    conditions_regions, facility_region, render_page, road_region, weather_regions,
    weather_unavailable_region, webcam_region, Region,
};
use crate::tasks::Dashboard;

/// Spawn the 15-minute refresh loop. The first cycle runs immediately.
///
/// Returns a `JoinHandle` that can be aborted on shutdown.
pub fn spawn_refresh_task(
    ctx: Arc<AppContext>,
    board: Arc<Dashboard>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        interval_secs = interval.as_secs(),
        "starting conditions refresh task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            run_cycle(&ctx, &board).await;
            #[allow(clippy::print_stdout)]
            {
                println!("{}", render_board(&ctx, &board));
            }
        }
    })
}

/// One refresh cycle: conditions chain, then weather, published wholesale.
pub async fn run_cycle(ctx: &AppContext, board: &Dashboard) {
    if !board.begin_cycle() {
        warn!("refresh cycle still in flight, skipping this tick");
        return;
    }

    let loaded = ctx.conditions.load().await;
    board.publish_conditions(loaded);

    match ctx.weather.summary().await {
        Ok(summary) => board.publish_weather(summary),
        Err(e) => {
            warn!(error = %e, "weather refresh failed, showing degraded card");
            board.mark_weather_failed();
        },
    }

    board.end_cycle();
}

/// Render everything currently on the dashboard as one page.
#[must_use]
pub fn render_board(ctx: &AppContext, board: &Dashboard) -> String {
    let mut regions: Vec<Region> = Vec::new();

    if let Some(loaded) = board.conditions() {
        regions.extend(conditions_regions(&loaded));

        let facility = application::resolve_facility_status(
            &ctx.now(),
            Some(&loaded.snapshot),
            &ctx.facility_defaults,
        );
        regions.push(facility_region(&facility));
        regions.push(road_region(&RoadReport::classify(&loaded.snapshot.road_status)));
    }

    if board.weather_failed() {
        regions.push(weather_unavailable_region());
    } else if let Some(summary) = board.weather() {
        regions.extend(weather_regions(&summary));
    }

    regions.push(webcam_region(board.webcam()));

    render_page(&regions)
}
