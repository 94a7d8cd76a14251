//! Light/dark switch.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/nav/theme_toggle.module.css");

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <button class=css::toggle aria-label="toggle theme" on:click=move |_| ctx.toggle_theme()>
            {move || {
                if ctx.is_dark() {
                    view! { <Icon icon=ic::MOON /> }.into_any()
                } else {
                    view! { <Icon icon=ic::SUN /> }.into_any()
                }
            }}
        </button>
    }
}
