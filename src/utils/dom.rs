//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::core::{ScrollMetrics, SectionBounds};
use crate::models::SectionId;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Canvas-sized viewport dimensions `(width, height)`.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Current scroll position, viewport height and document height.
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(window.document()?.document_element()?.scroll_height());
    Some(ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Document-relative `(top, height)` of an element.
pub fn element_extent(element: &HtmlElement) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    (rect.top() + scroll_y, rect.height())
}

/// Measure the given sections, skipping any not present in the document.
pub fn section_bounds(sections: impl IntoIterator<Item = SectionId>) -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };

    sections
        .into_iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id.dom_id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            let (top, height) = element_extent(&element);
            Some(SectionBounds { id, top, height })
        })
        .collect()
}

/// Replace the theme class on `<html>`.
pub fn set_root_theme_class(class: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(class);
    }
}

/// Navigate the current tab to `url` (used for `mailto:` links).
pub fn navigate(url: &str) -> bool {
    window().is_some_and(|w| w.location().set_href(url).is_ok())
}
