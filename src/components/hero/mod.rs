//! Hero section: revealed name and tagline over the particle field.

mod decrypt_text;
mod particles;

pub use decrypt_text::DecryptText;
pub use particles::ParticlesBackground;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{OWNER_NAME, TAGLINE, reveal::HERO_DURATION_MS};
use crate::models::SectionId;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id={SectionId::Home.dom_id()} class=css::hero>
            <ParticlesBackground />
            <div class=css::fade></div>

            <div class=css::content>
                <h1 class=css::name>
                    <DecryptText text={OWNER_NAME.to_string()} duration_ms=HERO_DURATION_MS />
                </h1>
                <p class=css::tagline>
                    <DecryptText text={TAGLINE.to_string()} duration_ms=HERO_DURATION_MS />
                </p>

                <div class=css::actions>
                    <a href={SectionId::Assistant.href()} class=css::primary>
                        "view my work"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                    <a href={SectionId::Contact.href()} class=css::outline>
                        "get in touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
