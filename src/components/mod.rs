//! UI components built with Leptos.
//!
//! - [`hero`] - Landing section with the decrypt reveal and particle canvas
//! - [`about`] - Education and work timeline
//! - [`assistant`] - Résumé talking points for a named company
//! - [`contact`] - Links and the `mailto:` form
//! - [`nav`] - Scroll-spy navigation and theme toggle
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod about;
pub mod assistant;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod nav;

pub use about::About;
pub use assistant::AiAssistant;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::{DecryptText, Hero};
pub use nav::{Navbar, ThemeToggle};
