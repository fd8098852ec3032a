use std::fmt;

use crate::Point;

/// Text shown on the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeLabel {
    Words(u64),
    Copied(u64),
}

impl fmt::Display for BadgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeLabel::Words(count) => write!(f, "Words: {count}"),
            BadgeLabel::Copied(count) => write!(f, "Copied: {count}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeCursor {
    #[default]
    Grab,
    Grabbing,
}

impl BadgeCursor {
    pub fn css(self) -> &'static str {
        match self {
            BadgeCursor::Grab => "grab",
            BadgeCursor::Grabbing => "grabbing",
        }
    }
}

/// Snapshot of what the badge should look like.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadgeView {
    /// `None` until the first successful count creates the badge.
    pub label: Option<BadgeLabel>,
    pub count: Option<u64>,
    /// Explicit position once the badge has been dragged.
    pub position: Option<Point>,
    pub dragging: bool,
}
