//! Single timeline card with a fade-in on first appearance.

use leptos::{ev, html, prelude::*};

use crate::config::scroll::CARD_VISIBLE_THRESHOLD;
use crate::core::visible_fraction;
use crate::models::{Side, TimelineEntry};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/about/timeline_item.module.css");

#[component]
pub fn TimelineItem(entry: TimelineEntry, side: Side) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    // Once shown, a card stays shown
    let check = move || {
        if visible.get_untracked() {
            return;
        }
        if let Some(item) = item_ref.get_untracked()
            && let Some(metrics) = dom::scroll_metrics()
        {
            let (top, height) = dom::element_extent(&item);
            if visible_fraction(metrics, top, height) >= CARD_VISIBLE_THRESHOLD {
                set_visible.set(true);
            }
        }
    };

    Effect::new(move || {
        if item_ref.get().is_some() {
            check();
        }
    });

    let listener = window_event_listener(ev::scroll, move |_| check());
    on_cleanup(move || listener.remove());

    let row_class = match side {
        Side::Left => css::item,
        Side::Right => css::itemRight,
    };

    view! {
        <div
            node_ref=item_ref
            class=move || {
                let state = if visible.get() { css::shown } else { css::hidden };
                format!("{} {}", row_class, state)
            }
        >
            <div class=css::dot>
                <img src={entry.logo} alt={entry.logo_alt} class=css::logo />
            </div>

            <div class=css::half>
                <div class=css::card>
                    <time class=css::date>{entry.date}</time>
                    <h3 class=css::title>{entry.title}</h3>
                    <h4 class=css::subtitle>{entry.subtitle}</h4>
                    {entry.detail.map(|detail| view! { <div class=css::detail>{detail}</div> })}
                </div>
            </div>

            <div class=css::spacer></div>
        </div>
    }
}
