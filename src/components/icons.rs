//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        BsGithub as Github, BsLinkedin as Linkedin, LuArrowRight as ArrowRight,
        LuDownload as Download, LuHouse as Home, LuMail as Mail, LuMoon as Moon,
        LuSparkles as Sparkles, LuSun as Sun, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsDownload as Download, BsEnvelope as Mail,
        BsGithub as Github, BsHouseFill as Home, BsLinkedin as Linkedin, BsMoon as Moon,
        BsPerson as User, BsStars as Sparkles, BsSun as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(USER, User);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(MAIL, Mail);
themed_icon!(GITHUB, Github);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(DOWNLOAD, Download);

/// Navigation icon for a section.
pub fn section_icon(section: crate::models::SectionId) -> Icon {
    use crate::models::SectionId;

    match section {
        SectionId::Home => HOME,
        SectionId::About => USER,
        SectionId::Assistant => SPARKLES,
        SectionId::Contact => MAIL,
    }
}
