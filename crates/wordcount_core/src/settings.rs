use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Selector of the chapter body on the supported reading site.
pub const DEFAULT_CONTENT_SELECTOR: &str = "div.chapter-inner.chapter-content";
/// Reserved element id of the overlay badge.
pub const DEFAULT_BADGE_ID: &str = "oswc-badge";

/// How mutation bursts are collapsed into recounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecountMode {
    /// Every batch re-arms the timer; one recount per quiet period.
    #[default]
    Trailing,
    /// The first batch arms the timer; later batches are dropped while it is pending.
    SingleFlight,
}

/// What a press on the badge may turn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickMode {
    /// Movement past the threshold drags, otherwise the release copies.
    #[default]
    DragAndClick,
    /// Plain click-to-copy; the badge never moves.
    ClickOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub content_selector: String,
    pub badge_id: String,
    pub badge_title: String,
    pub poll_interval_ms: u64,
    pub max_poll_attempts: u32,
    pub recount_delay_ms: u64,
    pub recount_mode: RecountMode,
    pub drag_threshold_px: f64,
    pub copied_flash_ms: u64,
    pub click_mode: ClickMode,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
            badge_id: DEFAULT_BADGE_ID.to_string(),
            badge_title: "Click to copy".to_string(),
            poll_interval_ms: 300,
            max_poll_attempts: 20,
            recount_delay_ms: 250,
            recount_mode: RecountMode::Trailing,
            drag_threshold_px: 5.0,
            copied_flash_ms: 900,
            click_mode: ClickMode::DragAndClick,
        }
    }
}

impl CounterSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn recount_delay(&self) -> Duration {
        Duration::from_millis(self.recount_delay_ms)
    }

    pub fn copied_flash(&self) -> Duration {
        Duration::from_millis(self.copied_flash_ms)
    }
}
