//! Core logic for the portfolio, independent of the browser.
//!
//! This module provides:
//! - [`retry::fetch_with_backoff`] with [`RetryPolicy`] for resilient JSON POSTs
//! - [`GeminiClient`] for résumé talking points
//! - [`RevealRunner`] for the decrypt-style text animation
//! - [`active_section`] and [`timeline_fill_percent`] for scroll-driven UI
//! - [`ParticleField`] for the hero background

pub mod assistant;
pub mod error;
pub mod particles;
pub mod retry;
pub mod reveal;
pub mod scroll;

pub use assistant::GeminiClient;
pub use particles::ParticleField;
pub use retry::{HttpResponse, HttpTransport, RetryOn, RetryPolicy, Sleeper};
pub use reveal::{IntervalTimer, RevealRunner};
pub use scroll::{
    ScrollMetrics, SectionBounds, active_section, timeline_fill_percent, visible_fraction,
};
