//! Google-Sheets-backed conditions integration for Nordique
//!
//! The trail conditions live in a spreadsheet the operators edit by hand.
//! Five routes lead to it, in decreasing order of preference: an Apps
//! Script JSON endpoint, the direct CSV export, the gviz CSV export, and
//! two public relays wrapping the gviz export for when the direct routes
//! are blocked. This crate knows how to talk to each route and how to turn
//! a raw payload into a [`domain::ConditionsSnapshot`]; choosing between
//! routes is the application chain's job.

pub mod csv;
mod client;
mod config;
mod error;
mod extract;
mod json;

pub use client::SheetClient;
pub use config::SheetConfig;
pub use error::SheetError;
pub use extract::snapshot_from_grid;
