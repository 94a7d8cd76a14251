//! Navigation with scroll-spy highlighting.
//!
//! Desktop renders a floating vertical pill on the left; mobile renders a
//! bottom bar. Both read the active section from [`AppContext`].

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons::section_icon;
use crate::config::NAV_ITEMS;
use crate::core::active_section;
use crate::models::NavItem;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/nav/navbar.module.css");

/// Recompute the active section from the current layout.
fn sync_active_section(ctx: AppContext) {
    let Some(metrics) = dom::scroll_metrics() else {
        return;
    };
    let sections = dom::section_bounds(NAV_ITEMS.iter().map(|item| item.section));
    let active = active_section(metrics, &sections);
    if ctx.active_section.get_untracked() != active {
        ctx.active_section.set(active);
    }
}

#[component]
fn NavLink(item: NavItem, #[prop(optional)] with_tooltip: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let is_active = move || ctx.active_section.get() == item.section;

    view! {
        <a href={item.section.href()} class=css::link aria-label={item.name}>
            <span class=move || if is_active() { css::iconActive } else { css::icon }>
                <Icon icon={section_icon(item.section)} />
            </span>
            {with_tooltip.then(|| view! { <span class=css::tooltip>{item.label()}</span> })}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let listener = window_event_listener(ev::scroll, move |_| sync_active_section(ctx));
    on_cleanup(move || listener.remove());

    view! {
        <nav class=css::desktop>
            {NAV_ITEMS
                .iter()
                .map(|item| view! { <NavLink item={*item} with_tooltip=true /> })
                .collect_view()}
        </nav>

        <nav class=css::mobile>
            {NAV_ITEMS
                .iter()
                .map(|item| view! { <NavLink item={*item} /> })
                .collect_view()}
        </nav>
    }
}
