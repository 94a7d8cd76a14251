//! Page sections and navigation entries.

/// One of the page's top-level sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Assistant,
    Contact,
}

impl SectionId {
    /// Element id of the `<section>` in the document.
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Assistant => "learn-more-ai",
            Self::Contact => "contact",
        }
    }

    /// In-page anchor (`#id`).
    pub fn href(self) -> String {
        format!("#{}", self.dom_id())
    }
}

/// Navigation bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    /// Accessible label.
    pub name: &'static str,
    /// Hover text; falls back to `name`.
    pub tooltip: Option<&'static str>,
}

impl NavItem {
    pub const fn new(section: SectionId, name: &'static str, tooltip: Option<&'static str>) -> Self {
        Self {
            section,
            name,
            tooltip,
        }
    }

    pub fn label(&self) -> &'static str {
        self.tooltip.unwrap_or(self.name)
    }
}
