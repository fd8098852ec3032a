use std::time::Duration;

use thiserror::Error;
use wordcount_core::{BadgeCursor, Point, PointerId, TimerKind, TimerToken};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard api unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Everything the driver needs from one document.
///
/// Timer callbacks, mutation observer batches and pointer events flow back
/// into the driver as messages; the host only performs side effects.
pub trait PageHost {
    /// Used in diagnostics only.
    fn location(&self) -> String {
        String::new()
    }

    /// Visible text of the content region, `None` while it does not exist.
    fn region_text(&self) -> Option<String>;

    fn has_badge(&self, badge_id: &str) -> bool;
    /// Creates the badge element and attaches it to the document.
    fn create_badge(&mut self, badge_id: &str, title: &str);
    /// Hooks pointer handlers up to the badge.
    fn wire_badge(&mut self, badge_id: &str);
    /// Writes the label, the raw count data attribute and the copied styling.
    fn write_badge(&mut self, label: &str, count: u64, copied: bool);
    /// Pins the badge at explicit viewport coordinates.
    fn move_badge(&mut self, to: Point);
    fn set_cursor(&mut self, cursor: BadgeCursor);

    fn capture_pointer(&mut self, pointer_id: PointerId);
    fn release_pointer(&mut self, pointer_id: PointerId);
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Starts observing the content region. Returns false when it is gone.
    fn attach_observer(&mut self) -> bool;

    /// Arms `timer`, replacing any pending instance of the same kind.
    fn schedule(&mut self, timer: TimerKind, token: TimerToken, delay: Duration);
    fn cancel(&mut self, timer: TimerKind);
}
