//! Driver-owned session state
//!
//! The only mutable state in the whole application: the price-calculator
//! selection and the one-shot guard that keeps the detailed refresh loop
//! from being started twice. Everything else is rebuilt per refresh.

use std::sync::atomic::{AtomicBool, Ordering};

use domain::{Activity, Duration, PriceQuote, Profile, TariffTable};
use parking_lot::RwLock;

/// Current calculator selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub profile: Profile,
    pub activity: Activity,
    pub duration: Duration,
}

/// Interactive price-calculator session: a selection over the immutable
/// tariff table. Re-quoting happens on every change.
#[derive(Debug)]
pub struct CalculatorSession {
    table: TariffTable,
    selection: RwLock<Selection>,
}

impl CalculatorSession {
    #[must_use]
    pub fn new(table: TariffTable) -> Self {
        Self {
            table,
            selection: RwLock::new(Selection::default()),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        *self.selection.read()
    }

    pub fn set_profile(&self, profile: Profile) -> Option<PriceQuote> {
        self.selection.write().profile = profile;
        self.quote()
    }

    pub fn set_activity(&self, activity: Activity) -> Option<PriceQuote> {
        self.selection.write().activity = activity;
        self.quote()
    }

    pub fn set_duration(&self, duration: Duration) -> Option<PriceQuote> {
        self.selection.write().duration = duration;
        self.quote()
    }

    /// Quote for the current selection; `None` renders as the inline
    /// "Combinaison non disponible" message.
    #[must_use]
    pub fn quote(&self) -> Option<PriceQuote> {
        let sel = self.selection();
        self.table.quote(sel.profile, sel.activity, sel.duration)
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(TariffTable::standard())
    }
}

/// One-shot flag: `first_use` returns true exactly once.
#[derive(Debug, Default)]
pub struct OnceFlag(AtomicBool);

impl OnceFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn first_use(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}
