//! Browser-facing utilities.
//!
//! Provides:
//! - [`GlooTransport`], [`BrowserSleeper`] - Fetch seams backed by `gloo`
//! - [`BrowserInterval`] - `setInterval` timer for the reveal animation
//! - [`dom`] - Window, scroll and layout access
//! - [`mailto_url`] - Percent-encoded `mailto:` links
//! - [`log`] - `tracing` subscriber writing to the browser console

pub mod dom;
mod fetch;
mod interval;
pub mod log;
mod url;

pub use fetch::{BrowserSleeper, GlooTransport};
pub use interval::BrowserInterval;
pub use url::mailto_url;
