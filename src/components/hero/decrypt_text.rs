//! Decrypt-style text reveal component.

use leptos::prelude::*;

use crate::core::RevealRunner;
use crate::utils::BrowserInterval;

stylance::import_crate_style!(css, "src/components/hero/decrypt_text.module.css");

/// Text that resolves from random glyphs to `text` over `duration_ms`.
///
/// Changing either prop cancels the running animation and starts a new one
/// with a fresh reveal order.
#[component]
pub fn DecryptText(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] duration_ms: Signal<u32>,
) -> impl IntoView {
    let (display, set_display) = signal(String::new());
    let runner = StoredValue::new_local(None::<RevealRunner<BrowserInterval>>);

    let on_tick = move || {
        if let Some(Some(next)) = runner.try_update_value(|r| r.as_mut().and_then(RevealRunner::tick)) {
            set_display.set(next);
        }
    };
    runner.set_value(Some(RevealRunner::new(BrowserInterval::new(on_tick))));

    Effect::new(move || {
        let source = text.get();
        let duration = duration_ms.get();
        let initial = runner
            .try_update_value(|r| r.as_mut().map(|r| r.restart(&source, duration)))
            .flatten()
            .unwrap_or(source);
        set_display.set(initial);
    });

    on_cleanup(move || {
        runner.try_update_value(|r| {
            if let Some(r) = r {
                r.stop();
            }
        });
    });

    view! { <span class=css::decrypt>{display}</span> }
}
