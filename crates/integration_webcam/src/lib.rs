//! Webcam availability probe for Nordique
//!
//! The summit webcam publishes a plain JPEG that browsers cache hard.
//! Every probe re-requests the image with a cache-busting query parameter
//! and reports whether a fresh frame came back; the presenter toggles
//! between the live view and the fallback panel on that signal.

mod client;
mod config;
mod error;

pub use client::{WebcamClient, WebcamFrame};
pub use config::WebcamConfig;
pub use error::WebcamError;
