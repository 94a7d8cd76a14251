//! Root application module.
//!
//! Contains the main App component, AppContext definition,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::{About, AiAssistant, Contact, Footer, Hero, Navbar, ThemeToggle};
use crate::config::{RESUME_FILE_NAME, RESUME_URL};
use crate::models::{SectionId, Theme};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. Replaces ambient global state with
/// explicit signals:
/// - **Theme**: light/dark preference (in memory only)
/// - **Active section**: which nav entry is highlighted (scroll-spy)
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Theme preference.
    pub theme: RwSignal<Theme>,

    /// Section currently in view.
    pub active_section: RwSignal<SectionId>,
}

impl AppContext {
    /// Creates a new context: dark theme, home section active.
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            active_section: RwSignal::new(SectionId::default()),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the `<html>` theme class in sync
/// - Lays out the navigation and the page sections
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move || {
        let class = ctx.theme.get().class_name();
        dom::set_root_theme_class(class);
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <h1>"something went wrong"</h1>
                    <p>"an unexpected error occurred. please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <div class=css::page>
                <div class=css::themeToggle>
                    <ThemeToggle />
                </div>

                <div class=css::resumeButton>
                    <a href=RESUME_URL download=RESUME_FILE_NAME class=css::starBorder>
                        <span class=css::resumeInner>
                            <Icon icon=ic::DOWNLOAD />
                            <span>"download resume"</span>
                        </span>
                    </a>
                </div>

                <Navbar />

                <main class=css::main>
                    <Hero />
                    <About />
                    <AiAssistant />
                    <Contact />
                </main>

                <Footer />
            </div>
        </ErrorBoundary>
    }
}
