//! Published display state
//!
//! The refresh tasks write whole values into swap cells; the renderer
//! reads whatever is current. No locks are held across awaits and stale
//! values are simply replaced on the next cycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use application::LoadedConditions;
use arc_swap::{ArcSwap, ArcSwapOption};
use domain::WeatherSummary;

use crate::presenter::WebcamView;

/// Latest outputs of the refresh tasks
#[derive(Debug)]
pub struct Dashboard {
    conditions: ArcSwapOption<LoadedConditions>,
    weather: ArcSwapOption<WeatherSummary>,
    weather_failed: AtomicBool,
    webcam: ArcSwap<WebcamView>,
    busy: AtomicBool,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: ArcSwapOption::empty(),
            weather: ArcSwapOption::empty(),
            weather_failed: AtomicBool::new(false),
            webcam: ArcSwap::from_pointee(WebcamView::Unknown),
            busy: AtomicBool::new(false),
        }
    }

    /// Claim the in-flight slot. Returns false when a cycle is already
    /// running; the caller skips instead of piling up overlapping cycles.
    pub fn begin_cycle(&self) -> bool {
        !self.busy.swap(true, Ordering::SeqCst)
    }

    pub fn end_cycle(&self) {
        self.busy.store(false, Ordering::SeqCst);
    }

    pub fn publish_conditions(&self, loaded: LoadedConditions) {
        self.conditions.store(Some(Arc::new(loaded)));
    }

    #[must_use]
    pub fn conditions(&self) -> Option<Arc<LoadedConditions>> {
        self.conditions.load_full()
    }

    pub fn publish_weather(&self, summary: WeatherSummary) {
        self.weather_failed.store(false, Ordering::SeqCst);
        self.weather.store(Some(Arc::new(summary)));
    }

    /// Keep the last good summary but mark the weather card degraded.
    pub fn mark_weather_failed(&self) {
        self.weather_failed.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn weather(&self) -> Option<Arc<WeatherSummary>> {
        self.weather.load_full()
    }

    #[must_use]
    pub fn weather_failed(&self) -> bool {
        self.weather_failed.load(Ordering::SeqCst)
    }

    pub fn set_webcam(&self, view: WebcamView) {
        self.webcam.store(Arc::new(view));
    }

    #[must_use]
    pub fn webcam(&self) -> WebcamView {
        **self.webcam.load()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_guard_is_exclusive() {
        let board = Dashboard::new();
        assert!(board.begin_cycle());
        assert!(!board.begin_cycle(), "second cycle must be skipped");
        board.end_cycle();
        assert!(board.begin_cycle());
    }

    #[test]
    fn weather_failure_keeps_the_last_summary() {
        let board = Dashboard::new();
        assert!(board.weather().is_none());
        assert!(!board.weather_failed());

        board.mark_weather_failed();
        assert!(board.weather_failed());
        assert!(board.weather().is_none());
    }

    #[test]
    fn webcam_view_is_replaced_wholesale() {
        let board = Dashboard::new();
        assert_eq!(board.webcam(), WebcamView::Unknown);
        board.set_webcam(WebcamView::Live { bytes: 1024 });
        assert_eq!(board.webcam(), WebcamView::Live { bytes: 1024 });
        board.set_webcam(WebcamView::Unavailable);
        assert_eq!(board.webcam(), WebcamView::Unavailable);
    }
}
