//! Presentation layer for Nordique
//!
//! Config loading, the composition root, the text presenter, and the
//! watch-mode background tasks. The binary in `main.rs` is a thin clap
//! front over these modules.

pub mod adapters;
pub mod config;
pub mod context;
pub mod presenter;
pub mod tasks;
