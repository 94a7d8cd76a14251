//! Scroll-derived UI state: active navigation section and timeline fill.
//!
//! Pure functions over measured layout values, so the scroll listeners in
//! `components` stay thin.

use crate::config::scroll::{BOTTOM_SLACK_PX, SECTION_OFFSET_PX, TIMELINE_START_FRACTION};
use crate::models::SectionId;

/// Measured vertical extent of a section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

/// Viewport and document measurements at the time of a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Section to highlight in the navigation.
///
/// The first section whose band `[top - 100, top - 100 + height)` contains
/// the scroll position wins, defaulting to home. The last section (contact)
/// overrides when the page is scrolled to within 50px of the bottom or its
/// top is above the middle of the viewport.
pub fn active_section(metrics: ScrollMetrics, sections: &[SectionBounds]) -> SectionId {
    let y = metrics.scroll_y;

    let mut current = sections
        .iter()
        .find(|s| {
            let top = s.top - SECTION_OFFSET_PX;
            y >= top && y < top + s.height
        })
        .map(|s| s.id)
        .unwrap_or_default();

    if let Some(last) = sections.last() {
        let at_bottom =
            y + metrics.viewport_height >= metrics.document_height - BOTTOM_SLACK_PX;
        let past_middle = y + metrics.viewport_height / 2.0 > last.top;
        if at_bottom || past_middle {
            current = last.id;
        }
    }

    current
}

/// Timeline fill as a percentage in `0.0..=100.0`.
///
/// Filling starts once the viewport bottom has passed the timeline top by
/// 30% of the viewport height and completes at the timeline bottom.
pub fn timeline_fill_percent(
    metrics: ScrollMetrics,
    timeline_top: f64,
    timeline_height: f64,
) -> f64 {
    let viewport_bottom = metrics.scroll_y + metrics.viewport_height;
    let start = timeline_top + metrics.viewport_height * TIMELINE_START_FRACTION;
    let end = timeline_top + timeline_height;
    let span = end - start;

    if viewport_bottom <= start {
        return 0.0;
    }
    if span <= 0.0 {
        return 100.0;
    }

    ((viewport_bottom - start) / span * 100.0).clamp(0.0, 100.0)
}

/// Fraction (`0.0..=1.0`) of an element's height inside the viewport.
pub fn visible_fraction(metrics: ScrollMetrics, top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_top = metrics.scroll_y;
    let view_bottom = view_top + metrics.viewport_height;
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}
