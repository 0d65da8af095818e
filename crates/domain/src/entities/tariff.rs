//! Tariff table and price quotes
//!
//! The table is the winter price grid of the nordic area: one row per
//! (profile, activity) pair with a half-day and a full-day price. It is
//! built once and never mutated at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Visitor profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Adult,
    /// 6-16 years
    Junior,
    /// Students and 70+
    Reduced,
    /// 76+ years
    Senior,
}

impl Profile {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Adult => "Adulte",
            Self::Junior => "Junior",
            Self::Reduced => "Tarif réduit",
            Self::Senior => "Vétéran",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Adult, Self::Junior, Self::Reduced, Self::Senior]
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adulte" | "adult" => Ok(Self::Adult),
            "junior" => Ok(Self::Junior),
            "reduit" | "réduit" | "reduced" => Ok(Self::Reduced),
            "senior" | "veteran" | "vétéran" => Ok(Self::Senior),
            _ => Err(DomainError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Activity being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Cross-country skating, skis included
    #[default]
    SkatingSki,
    /// Classic cross-country, skis included
    ClassicSki,
    /// Snowshoe access and rental
    Snowshoe,
    /// Trail pass only, own equipment
    PassOnly,
}

impl Activity {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SkatingSki => "Ski de fond skating",
            Self::ClassicSki => "Ski de fond alternatif",
            Self::Snowshoe => "Raquettes",
            Self::PassOnly => "Forfait seul",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::SkatingSki, Self::ClassicSki, Self::Snowshoe, Self::PassOnly]
    }
}

impl FromStr for Activity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skating" | "fond-skating" | "skating-ski" => Ok(Self::SkatingSki),
            "classique" | "alternatif" | "fond-alternatif" | "classic-ski" => Ok(Self::ClassicSki),
            "raquettes" | "raquette" | "snowshoe" => Ok(Self::Snowshoe),
            "forfait" | "forfait-seul" | "pass-only" => Ok(Self::PassOnly),
            _ => Err(DomainError::UnknownActivity(s.to_string())),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Duration of the outing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    #[default]
    HalfDay,
    FullDay,
}

impl Duration {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HalfDay => "Demi-journée",
            Self::FullDay => "Journée",
        }
    }
}

impl FromStr for Duration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demi" | "demi-journee" | "demi-journée" | "half-day" => Ok(Self::HalfDay),
            "journee" | "journée" | "jour" | "full-day" => Ok(Self::FullDay),
            _ => Err(DomainError::UnknownDuration(s.to_string())),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A priced answer from the tariff table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Amount in euro cents; zero means free access
    pub amount_cents: u32,
    /// Breakdown of what the price covers
    pub detail: String,
}

impl PriceQuote {
    /// French-style rendering: "Gratuit" for zero, no decimals for whole
    /// euros, comma and two digits otherwise.
    #[must_use]
    pub fn amount_label(&self) -> String {
        if self.amount_cents == 0 {
            "Gratuit".to_string()
        } else if self.amount_cents % 100 == 0 {
            format!("{} €", self.amount_cents / 100)
        } else {
            format!("{},{:02} €", self.amount_cents / 100, self.amount_cents % 100)
        }
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.amount_cents == 0
    }
}

struct TariffRow {
    profile: Profile,
    activity: Activity,
    half_day_cents: u32,
    full_day_cents: u32,
    half_day_detail: &'static str,
    full_day_detail: &'static str,
}

/// The fixed three-axis price grid: profile × activity × duration.
#[derive(Debug)]
pub struct TariffTable {
    rows: Vec<TariffRow>,
}

impl fmt::Debug for TariffRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TariffRow")
            .field("profile", &self.profile)
            .field("activity", &self.activity)
            .field("half_day_cents", &self.half_day_cents)
            .field("full_day_cents", &self.full_day_cents)
            .finish_non_exhaustive()
    }
}

impl TariffTable {
    /// The current winter price grid.
    #[must_use]
    pub fn standard() -> Self {
        use Activity::{ClassicSki, PassOnly, SkatingSki, Snowshoe};
        use Profile::{Adult, Junior, Reduced, Senior};

        let row = |profile,
                   activity,
                   half_day_cents,
                   full_day_cents,
                   half_day_detail,
                   full_day_detail| TariffRow {
            profile,
            activity,
            half_day_cents,
            full_day_cents,
            half_day_detail,
            full_day_detail,
        };

        Self {
            rows: vec![
                row(Adult, SkatingSki, 2200, 2400,
                    "Forfait 9€ + Location skating ½j 13€",
                    "Forfait 9€ + Location skating journée 15€"),
                row(Adult, ClassicSki, 1900, 2100,
                    "Forfait 9€ + Location alternatif ½j 10€",
                    "Forfait 9€ + Location alternatif journée 12€"),
                row(Adult, Snowshoe, 850, 1050,
                    "Raquette 2,50€ + Location ½j 6€",
                    "Raquette 2,50€ + Location journée 8€"),
                row(Adult, PassOnly, 900, 900,
                    "Forfait journée adulte (matériel personnel)",
                    "Forfait journée adulte (matériel personnel)"),
                row(Junior, SkatingSki, 1000, 1200,
                    "Forfait inclus* + Location skating ½j 10€",
                    "Forfait inclus* + Location skating journée 12€"),
                row(Junior, ClassicSki, 800, 1000,
                    "Forfait inclus* + Location alternatif ½j 8€",
                    "Forfait inclus* + Location alternatif journée 10€"),
                row(Junior, Snowshoe, 550, 550,
                    "Raquette 2,50€ + Location baby 3€",
                    "Raquette 2,50€ + Location baby 3€"),
                row(Junior, PassOnly, 0, 0,
                    "Accès gratuit junior (6–16 ans)*",
                    "Accès gratuit junior (6–16 ans)*"),
                row(Reduced, SkatingSki, 1650, 1850,
                    "Tarif réduit 6,50€ + Location skating ½j 10€",
                    "Tarif réduit 6,50€ + Location skating journée 12€"),
                row(Reduced, ClassicSki, 1450, 1650,
                    "Tarif réduit 6,50€ + Location alternatif ½j 8€",
                    "Tarif réduit 6,50€ + Location alternatif journée 10€"),
                row(Reduced, Snowshoe, 850, 1050,
                    "Raquette 2,50€ + Location ½j 6€",
                    "Raquette 2,50€ + Location journée 8€"),
                row(Reduced, PassOnly, 650, 650,
                    "Tarif réduit journée (étudiant/70+)",
                    "Tarif réduit journée (étudiant/70+)"),
                row(Senior, SkatingSki, 1300, 1500,
                    "Vétéran 3€ + Location skating ½j 10€",
                    "Vétéran 3€ + Location skating journée 12€"),
                row(Senior, ClassicSki, 1100, 1300,
                    "Vétéran 3€ + Location alternatif ½j 8€",
                    "Vétéran 3€ + Location alternatif journée 10€"),
                row(Senior, Snowshoe, 850, 1050,
                    "Raquette 2,50€ + Location ½j 6€",
                    "Raquette 2,50€ + Location journée 8€"),
                row(Senior, PassOnly, 300, 300,
                    "Vétéran 76+ ans (matériel personnel)",
                    "Vétéran 76+ ans (matériel personnel)"),
            ],
        }
    }

    /// Look up a quote. Unknown combinations yield `None`; the caller
    /// renders an inline "combination unavailable" message.
    #[must_use]
    pub fn quote(
        &self,
        profile: Profile,
        activity: Activity,
        duration: Duration,
    ) -> Option<PriceQuote> {
        let row = self
            .rows
            .iter()
            .find(|r| r.profile == profile && r.activity == activity)?;
        let (amount_cents, detail) = match duration {
            Duration::HalfDay => (row.half_day_cents, row.half_day_detail),
            Duration::FullDay => (row.full_day_cents, row.full_day_detail),
        };
        Some(PriceQuote {
            amount_cents,
            detail: detail.to_string(),
        })
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_has_a_quote() {
        let table = TariffTable::standard();
        for profile in Profile::all() {
            for activity in Activity::all() {
                for duration in [Duration::HalfDay, Duration::FullDay] {
                    assert!(
                        table.quote(profile, activity, duration).is_some(),
                        "missing quote for {profile:?}/{activity:?}/{duration:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn junior_pass_is_free() {
        let table = TariffTable::standard();
        let quote = table
            .quote(Profile::Junior, Activity::PassOnly, Duration::HalfDay)
            .unwrap();
        assert_eq!(quote.amount_cents, 0);
        assert!(quote.is_free());
        assert_eq!(quote.amount_label(), "Gratuit");
    }

    #[test]
    fn whole_amounts_render_without_decimals() {
        let table = TariffTable::standard();
        let quote = table
            .quote(Profile::Adult, Activity::SkatingSki, Duration::HalfDay)
            .unwrap();
        assert_eq!(quote.amount_cents, 2200);
        assert_eq!(quote.amount_label(), "22 €");
    }

    #[test]
    fn fractional_amounts_render_with_comma() {
        let table = TariffTable::standard();
        let quote = table
            .quote(Profile::Adult, Activity::Snowshoe, Duration::HalfDay)
            .unwrap();
        assert_eq!(quote.amount_cents, 850);
        assert_eq!(quote.amount_label(), "8,50 €");

        let reduced = table
            .quote(Profile::Reduced, Activity::PassOnly, Duration::FullDay)
            .unwrap();
        assert_eq!(reduced.amount_label(), "6,50 €");
    }

    #[test]
    fn half_and_full_day_differ_where_expected() {
        let table = TariffTable::standard();
        let half = table
            .quote(Profile::Senior, Activity::ClassicSki, Duration::HalfDay)
            .unwrap();
        let full = table
            .quote(Profile::Senior, Activity::ClassicSki, Duration::FullDay)
            .unwrap();
        assert_eq!(half.amount_cents, 1100);
        assert_eq!(full.amount_cents, 1300);
        assert_ne!(half.detail, full.detail);
    }

    #[test]
    fn profile_parsing_accepts_french_and_english() {
        assert_eq!("adulte".parse::<Profile>().unwrap(), Profile::Adult);
        assert_eq!("réduit".parse::<Profile>().unwrap(), Profile::Reduced);
        assert_eq!("senior".parse::<Profile>().unwrap(), Profile::Senior);
        assert!("visiteur".parse::<Profile>().is_err());
    }

    #[test]
    fn activity_and_duration_parsing() {
        assert_eq!("skating".parse::<Activity>().unwrap(), Activity::SkatingSki);
        assert_eq!(
            "fond-alternatif".parse::<Activity>().unwrap(),
            Activity::ClassicSki
        );
        assert_eq!("demi".parse::<Duration>().unwrap(), Duration::HalfDay);
        assert_eq!("journee".parse::<Duration>().unwrap(), Duration::FullDay);
        assert!("mois".parse::<Duration>().is_err());
    }
}
