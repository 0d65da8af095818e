//! Nordique CLI
//!
//! Terminal frontend for the nordic-area conditions service: one-shot
//! status/conditions/weather/tariff commands plus a watch mode that keeps
//! refreshing the way the website does.

#![allow(clippy::print_stdout)]

use std::sync::Arc;
use std::time::Duration;

use application::resolve_facility_status;
use clap::{Parser, Subcommand};
use domain::{RoadReport, DEFAULT_ROAD_ADVISORY};
use tracing::info;

use presentation_cli::config::AppConfig;
use presentation_cli::context::AppContext;
use presentation_cli::presenter::{
    conditions_regions, facility_region, quote_region, render_page, road_region, weather_regions,
    weather_unavailable_region, Region,
};
use presentation_cli::tasks::{spawn_refresh_task, spawn_webcam_task, Dashboard};

/// Nordique CLI
#[derive(Parser)]
#[command(name = "nordique")]
#[command(version, about = "Conditions, météo et tarifs de l'espace nordique", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quick foyer and road status (single fast fetch, clock fallback)
    Status,

    /// Full conditions: domain status, snow zones, trails, services
    Conditions,

    /// Current weather, snow indicators, and the 5-day forecast
    Weather,

    /// Price lookup in the tariff grid
    Quote {
        /// Visitor profile: adulte, junior, reduit, senior
        profile: String,

        /// Activity: skating, classique, raquettes, forfait
        activity: String,

        /// Duration: demi, journee
        duration: String,
    },

    /// Keep refreshing conditions, weather, and webcam like the website
    Watch,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load()?;
    let ctx = Arc::new(AppContext::build(config)?);

    match cli.command {
        Commands::Status => status(&ctx).await,
        Commands::Conditions => conditions(&ctx).await,
        Commands::Weather => weather(&ctx).await,
        Commands::Quote {
            profile,
            activity,
            duration,
        } => quote(&ctx, &profile, &activity, &duration),
        Commands::Watch => watch(ctx).await,
    }
}

/// Landing-page behavior: one fast attempt, then the clock decides.
async fn status(ctx: &AppContext) -> anyhow::Result<()> {
    let snapshot = ctx.conditions.quick_status().await;

    let facility = resolve_facility_status(&ctx.now(), snapshot.as_ref(), &ctx.facility_defaults);
    let road = snapshot.as_ref().map_or_else(
        || {
            RoadReport::classify(&format!(
                "{DEFAULT_ROAD_ADVISORY} — ☎ {}",
                ctx.site.contact_phone
            ))
        },
        |s| RoadReport::classify(&s.road_status),
    );

    println!(
        "{}",
        render_page(&[facility_region(&facility), road_region(&road)])
    );
    Ok(())
}

async fn conditions(ctx: &AppContext) -> anyhow::Result<()> {
    let loaded = ctx.conditions.load().await;

    let mut regions = conditions_regions(&loaded);
    let facility =
        resolve_facility_status(&ctx.now(), Some(&loaded.snapshot), &ctx.facility_defaults);
    regions.push(facility_region(&facility));
    regions.push(road_region(&RoadReport::classify(
        &loaded.snapshot.road_status,
    )));

    println!("{}", render_page(&regions));
    Ok(())
}

async fn weather(ctx: &AppContext) -> anyhow::Result<()> {
    let regions: Vec<Region> = match ctx.weather.summary().await {
        Ok(summary) => weather_regions(&summary),
        Err(e) => {
            info!(error = %e, "weather unavailable");
            vec![weather_unavailable_region()]
        },
    };
    println!("{}", render_page(&regions));
    Ok(())
}

fn quote(ctx: &AppContext, profile: &str, activity: &str, duration: &str) -> anyhow::Result<()> {
    ctx.calculator.set_profile(profile.parse()?);
    ctx.calculator.set_activity(activity.parse()?);
    ctx.calculator.set_duration(duration.parse()?);

    let selection = ctx.calculator.selection();
    println!(
        "{} · {} · {}",
        selection.profile, selection.activity, selection.duration
    );
    println!("{}", render_page(&[quote_region(ctx.calculator.quote().as_ref())]));
    Ok(())
}

/// The website's detailed-page behavior: quick status immediately, then
/// the full refresh loop plus the webcam probe, until interrupted.
async fn watch(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    if !ctx.watch_guard.first_use() {
        anyhow::bail!("watch loop already started");
    }

    status(&ctx).await?;

    // Both tasks tick immediately, so the first full page follows the
    // quick status without waiting out an interval.
    let board = Arc::new(Dashboard::new());
    let webcam_task = spawn_webcam_task(
        Arc::clone(&ctx),
        Arc::clone(&board),
        Duration::from_secs(ctx.webcam_refresh_secs),
    );
    let refresh_task = spawn_refresh_task(
        Arc::clone(&ctx),
        Arc::clone(&board),
        Duration::from_secs(ctx.site.refresh_secs),
    );

    tokio::signal::ctrl_c().await?;
    info!("shutting down watch mode");
    webcam_task.abort();
    refresh_task.abort();
    Ok(())
}
