//! Page footer.

use leptos::prelude::*;

use crate::config::OWNER_NAME;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <p>{format!("© {year} {OWNER_NAME}. all rights reserved.")}</p>
        </footer>
    }
}
