//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use crate::models::{NavItem, SectionId, TimelineEntry};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Résumé the AI assistant reasons over.
pub const RESUME_TEXT: &str = include_str!("../assets/text/resume.txt");

/// System instruction sent with every assistant request.
pub const SYSTEM_PROMPT: &str = include_str!("../assets/text/system_prompt.txt");

// =============================================================================
// Identity
// =============================================================================

/// Owner name shown in the hero and footer.
pub const OWNER_NAME: &str = "krishan patel";

/// Hero tagline, revealed under the name.
pub const TAGLINE: &str = "software engineer specializing in building scalable cloud solutions and intuitive full-stack applications";

/// Contact address used for the mailto link.
pub const CONTACT_EMAIL: &str = "krishanpatel00@gmail.com";

pub const GITHUB_URL: &str = "https://github.com/kpatell";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/krishanpatell/";

/// Downloadable résumé (served from the static dist root).
pub const RESUME_URL: &str = "/KrishanPatel-Resume.pdf";
pub const RESUME_FILE_NAME: &str = "KrishanPatel-Resume.pdf";

// =============================================================================
// Network Configuration
// =============================================================================

/// Per-attempt request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 30_000;

/// Retry defaults for the assistant request.
pub mod retry_defaults {
    use crate::core::RetryOn;

    /// Retries after the first attempt.
    pub const MAX_RETRIES: u32 = 3;
    /// Delay before the first retry.
    pub const INITIAL_DELAY_MS: u32 = 1000;
    /// Multiplier applied to the delay after each retry.
    pub const BACKOFF_FACTOR: f64 = 2.0;
    /// Non-429 HTTP errors are retried unless the build sets
    /// `ASSISTANT_RETRY_FAIL_FAST`.
    pub const RETRY_ON: RetryOn = match option_env!("ASSISTANT_RETRY_FAIL_FAST") {
        Some(_) => RetryOn::ThrottleAndTransport,
        None => RetryOn::AllFailures,
    };
}

/// Gemini `generateContent` endpoint.
pub mod gemini {
    pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
    pub const MODEL: &str = "gemini-2.5-flash-preview-09-2025";

    /// API key baked in at build time (`GEMINI_API_KEY=... trunk build`).
    /// A missing key is sent as empty and rejected by the server.
    pub const API_KEY: &str = match option_env!("GEMINI_API_KEY") {
        Some(key) => key,
        None => "",
    };
}

// =============================================================================
// Animation Configuration
// =============================================================================

/// Decrypt-style text reveal.
pub mod reveal {
    /// Glyphs shown in place of characters not yet revealed.
    pub const ALPHABET: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-=_+[]{}|;:,.<>/?";
    /// Duration used by the hero headings.
    pub const HERO_DURATION_MS: u32 = 1500;
    /// Placeholder shown before the first tick.
    pub const MASK_CHAR: char = '\u{00A0}';
}

/// Scroll-spy and timeline fill.
pub mod scroll {
    /// Sections count as active this many pixels before their top.
    pub const SECTION_OFFSET_PX: f64 = 100.0;
    /// Distance from the page bottom at which contact becomes active.
    pub const BOTTOM_SLACK_PX: f64 = 50.0;
    /// Fraction of the viewport scrolled past the timeline top before filling.
    pub const TIMELINE_START_FRACTION: f64 = 0.3;
    /// Share of a timeline card that must be on screen before it fades in.
    pub const CARD_VISIBLE_THRESHOLD: f64 = 0.1;
}

/// Canvas particle field.
pub mod particles {
    /// Canvas area (px²) per particle.
    pub const AREA_PER_PARTICLE: f64 = 9000.0;
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 3.0;
    /// Velocity components are drawn from `[-MAX_SPEED, MAX_SPEED)`.
    pub const MAX_SPEED: f64 = 0.2;
    pub const DARK_COLOR: &str = "rgba(255, 255, 255, 0.5)";
    pub const LIGHT_COLOR: &str = "rgba(0, 0, 0, 0.5)";
}

// =============================================================================
// Page Structure
// =============================================================================

/// Navigation entries, in page order. The last one is the contact section.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new(SectionId::Home, "home", None),
    NavItem::new(SectionId::About, "about", None),
    NavItem::new(SectionId::Assistant, "learn more using ai!", Some("try me!")),
    NavItem::new(SectionId::Contact, "contact", None),
];

/// About-section timeline, oldest first.
pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        logo: "/georgia-tech-logo.svg",
        logo_alt: "Georgia Tech Logo",
        title: "georgia institute of technology",
        subtitle: "b.s. in computer science",
        date: "graduated may 2023",
        detail: Some("threads: intelligence & devices"),
    },
    TimelineEntry {
        logo: "/capital-one-logo.svg",
        logo_alt: "Capital One Logo",
        title: "capital one",
        subtitle: "senior associate software engineer",
        date: "aug 2023 - present",
        detail: None,
    },
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
