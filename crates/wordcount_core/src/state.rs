use crate::bootstrap::{Bootstrap, BootstrapPhase};
use crate::gesture::PointerGesture;
use crate::recount::RecountScheduler;
use crate::view_model::{BadgeLabel, BadgeView};
use crate::{CounterSettings, Point, TimerToken};

/// Per-document controller state. Each document (main page or frame) owns one;
/// nothing is shared between them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    settings: CounterSettings,
    pub(crate) bootstrap: Bootstrap,
    pub(crate) recount: RecountScheduler,
    pub(crate) gesture: PointerGesture,
    pub(crate) poll_token: Option<TimerToken>,
    /// Last successful count, mirrored in the badge's data attribute.
    pub(crate) count: Option<u64>,
    /// Token of the pending "Copied" revert while the flash is showing.
    pub(crate) copied_token: Option<TimerToken>,
    pub(crate) position: Option<Point>,
    next_token: TimerToken,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new(CounterSettings::default())
    }
}

impl DocumentState {
    pub fn new(settings: CounterSettings) -> Self {
        Self {
            bootstrap: Bootstrap::new(settings.max_poll_attempts),
            recount: RecountScheduler::new(settings.recount_mode),
            gesture: PointerGesture::new(settings.drag_threshold_px, settings.click_mode),
            settings,
            poll_token: None,
            count: None,
            copied_token: None,
            position: None,
            next_token: 0,
        }
    }

    pub fn settings(&self) -> &CounterSettings {
        &self.settings
    }

    pub fn bootstrap_phase(&self) -> BootstrapPhase {
        self.bootstrap.phase()
    }

    pub fn poll_attempts(&self) -> u32 {
        self.bootstrap.attempts()
    }

    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn recount_pending(&self) -> bool {
        self.recount.pending().is_some()
    }

    pub fn is_self_updating(&self) -> bool {
        self.recount.is_self_updating()
    }

    /// Raised by the badge controller around its own writes so the mutation
    /// watcher ignores them.
    pub fn set_self_updating(&mut self, updating: bool) {
        self.recount.set_self_updating(updating);
    }

    pub fn view(&self) -> BadgeView {
        let label = self.count.map(|count| {
            if self.copied_token.is_some() {
                BadgeLabel::Copied(count)
            } else {
                BadgeLabel::Words(count)
            }
        });
        BadgeView {
            label,
            count: self.count,
            position: self.position,
            dragging: self.gesture.is_dragging(),
        }
    }

    pub(crate) fn next_token(&mut self) -> TimerToken {
        self.next_token += 1;
        self.next_token
    }
}
