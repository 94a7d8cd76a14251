//! "Learn more using AI" section.
//!
//! The visitor names a company and the assistant returns three talking
//! points connecting the résumé to it.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::DecryptText;
use crate::components::icons as ic;
use crate::config::RESUME_TEXT;
use crate::core::error::AssistantError;
use crate::core::{GeminiClient, RetryPolicy};
use crate::models::{AssistantSession, AssistantState, SectionId};
use crate::utils::{BrowserSleeper, GlooTransport};

stylance::import_crate_style!(css, "src/components/assistant/assistant.module.css");

const PLACEHOLDER: &str = "the ai magic will happen here...";

async fn request_talking_points(company: &str) -> Result<String, AssistantError> {
    let policy = RetryPolicy::from_config()?;
    let client = GeminiClient::new(GlooTransport::default(), BrowserSleeper, policy);
    client.talking_points(RESUME_TEXT, company).await
}

#[component]
pub fn AiAssistant() -> impl IntoView {
    let (company, set_company) = signal(String::new());
    let session = RwSignal::new(AssistantSession::default());
    let validation = RwSignal::new(None::<&'static str>);

    // Resubmitting (Enter) while loading supersedes the request in flight
    let submit = move || {
        let input = company.get_untracked();
        let started = session.try_update(|s| s.submit(&input));
        let (ticket, name) = match started {
            Some(Ok(started)) => started,
            Some(Err(message)) => {
                validation.set(Some(message));
                return;
            }
            None => return,
        };
        validation.set(None);

        spawn_local(async move {
            let outcome = request_talking_points(&name).await.map_err(|e| {
                tracing::error!(company = %name, error = %e, "assistant request failed");
                e.user_message().to_string()
            });

            let applied = session.try_update(|s| s.finish(ticket, outcome)).unwrap_or(false);
            if !applied {
                tracing::debug!(company = %name, "dropping superseded assistant response");
            }
        });
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let is_disabled = move || {
        session.with(|s| s.state().is_loading()) || company.with(|c| c.trim().is_empty())
    };

    let output = move || match session.with(|s| s.state().clone()) {
        AssistantState::Idle => {
            view! { <p class=css::placeholder>{PLACEHOLDER}</p> }.into_any()
        }
        AssistantState::Loading => view! {
            <div class=css::loading>
                <span class=css::spinner></span>
                <span>"generating..."</span>
            </div>
        }
        .into_any(),
        AssistantState::Answered(text) => {
            view! { <pre class=css::answer>{text}</pre> }.into_any()
        }
        AssistantState::Failed(message) => {
            view! { <p class=css::error>{message}</p> }.into_any()
        }
    };

    view! {
        <section id={SectionId::Assistant.dom_id()} class=css::assistant>
            <h2 class=css::heading>
                <DecryptText text={"learn more using ai".to_string()} duration_ms=1000u32 />
            </h2>
            <p class=css::intro>
                "enter a company name and see how my experience lines up with what they do."
            </p>

            <div class=css::form>
                <input
                    type="text"
                    class=css::input
                    placeholder="company name"
                    aria-label="company name"
                    prop:value=company
                    on:input=move |ev| {
                        set_company.set(event_target_value(&ev));
                        validation.set(None);
                    }
                    on:keydown=handle_keydown
                />
                <button class=css::submit disabled=is_disabled on:click=move |_| submit()>
                    <Icon icon=ic::SPARKLES />
                    <span>"generate"</span>
                </button>
            </div>

            {move || validation.get().map(|message| view! { <p class=css::error>{message}</p> })}

            <div class=css::output aria-live="polite">{output}</div>
        </section>
    }
}
