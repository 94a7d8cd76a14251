//! Contact section: direct links plus a form that opens the mail client.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL};
use crate::models::{ContactDraft, SectionId};
use crate::utils::{dom, mailto_url};

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

#[component]
pub fn Contact() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);

        let url = mailto_url(CONTACT_EMAIL, &current.subject_line(), &current.body());
        if !dom::navigate(&url) {
            tracing::warn!("could not open mail client");
        }
    };

    let direct_mail = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <section id={SectionId::Contact.dom_id()} class=css::contact>
            <h2 class=css::heading>"get in touch"</h2>
            <p class=css::intro>
                "have a question or want to work together? send me a message."
            </p>

            <div class=css::links>
                <a href=direct_mail class=css::link aria-label="email">
                    <Icon icon=ic::MAIL />
                    <span>{CONTACT_EMAIL}</span>
                </a>
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class=css::link aria-label="github">
                    <Icon icon=ic::GITHUB />
                    <span>"github"</span>
                </a>
                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class=css::link aria-label="linkedin">
                    <Icon icon=ic::LINKEDIN />
                    <span>"linkedin"</span>
                </a>
            </div>

            <form class=css::form on:submit=on_submit>
                <input
                    type="text"
                    class=css::field
                    placeholder="your name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    class=css::field
                    placeholder="subject"
                    prop:value=move || draft.with(|d| d.subject.clone())
                    on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                />
                <textarea
                    class=css::message
                    rows="6"
                    placeholder="your message"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| {
                        draft.update(|d| d.message = event_target_value(&ev));
                        error.set(None);
                    }
                ></textarea>

                {move || error.get().map(|message| view! { <p class=css::error>{message}</p> })}

                <button type="submit" class=css::send>
                    <span>"send message"</span>
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </form>
        </section>
    }
}
