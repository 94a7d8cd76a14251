//! About-section timeline entries.

/// One milestone on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Logo image path.
    pub logo: &'static str,
    pub logo_alt: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    /// Optional extra line under the subtitle.
    pub detail: Option<&'static str>,
}

/// Which side of the center line a card sits on (desktop layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Cards alternate, starting on the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }
}
