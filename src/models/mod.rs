//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`SectionId`], [`NavItem`] - Page sections and navigation
//! - [`TimelineEntry`], [`Side`] - About-section timeline
//! - [`Theme`] - Light/dark preference
//! - [`AssistantSession`], [`AssistantState`] - AI assistant panel
//! - [`ContactDraft`] - Contact form contents

mod assistant;
mod contact;
mod nav;
mod theme;
mod timeline;

pub use assistant::{AssistantSession, AssistantState};
pub use contact::ContactDraft;
pub use nav::{NavItem, SectionId};
pub use theme::Theme;
pub use timeline::{Side, TimelineEntry};
