//! About section: vertical timeline that fills as the visitor scrolls.

mod timeline_item;

pub use timeline_item::TimelineItem;

use leptos::{ev, html, prelude::*};

use crate::config::TIMELINE;
use crate::core::timeline_fill_percent;
use crate::models::{SectionId, Side};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/about/about.module.css");

#[component]
pub fn About() -> impl IntoView {
    let timeline_ref = NodeRef::<html::Div>::new();
    let (fill, set_fill) = signal(0.0_f64);

    let update_fill = move || {
        if let Some(timeline) = timeline_ref.get_untracked()
            && let Some(metrics) = dom::scroll_metrics()
        {
            let (top, height) = dom::element_extent(&timeline);
            set_fill.set(timeline_fill_percent(metrics, top, height));
        }
    };

    // Initial measurement once mounted
    Effect::new(move || {
        if timeline_ref.get().is_some() {
            update_fill();
        }
    });

    let listener = window_event_listener(ev::scroll, move |_| update_fill());
    on_cleanup(move || listener.remove());

    view! {
        <section id={SectionId::About.dom_id()} class=css::about>
            <h2 class=css::heading>"about me"</h2>

            <div node_ref=timeline_ref class=css::timeline>
                <div class=css::track></div>
                <div class=css::fill style:height=move || format!("{:.2}%", fill.get())></div>

                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <TimelineItem entry={*entry} side={Side::for_index(index)} /> })
                    .collect_view()}
            </div>
        </section>
    }
}
