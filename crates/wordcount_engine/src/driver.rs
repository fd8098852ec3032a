use std::collections::VecDeque;

use wordcount_core::{update, BadgeView, CountTrigger, CounterSettings, DocumentState, Effect, Msg};
use wordcount_logging::{wc_debug, wc_info, wc_trace, wc_warn};

use crate::badge::BadgeController;
use crate::host::PageHost;
use crate::words::{UnicodeWordCounter, WordCounter};

/// Runs the overlay for one document: feeds messages through the pure
/// update function and executes the resulting effects against the host.
pub struct OverlayDriver<H: PageHost> {
    state: DocumentState,
    host: H,
    badge: BadgeController,
    counter: Box<dyn WordCounter>,
    inbox: VecDeque<Msg>,
}

impl<H: PageHost> OverlayDriver<H> {
    pub fn new(settings: CounterSettings, host: H) -> Self {
        Self::with_counter(settings, host, Box::new(UnicodeWordCounter))
    }

    pub fn with_counter(settings: CounterSettings, host: H, counter: Box<dyn WordCounter>) -> Self {
        Self {
            badge: BadgeController::new(&settings),
            state: DocumentState::new(settings),
            host,
            counter,
            inbox: VecDeque::new(),
        }
    }

    pub fn start(&mut self) {
        self.dispatch(Msg::Start);
    }

    /// Applies `msg` and every follow-up message its effects produce.
    pub fn dispatch(&mut self, msg: Msg) {
        self.inbox.push_back(msg);
        while let Some(msg) = self.inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                self.run(effect);
            }
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn view(&self) -> BadgeView {
        self.state.view()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn badge_id(&self) -> &str {
        self.badge.id()
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleTimer {
                timer,
                token,
                delay,
            } => {
                wc_trace!("schedule {:?} token={} delay={:?}", timer, token, delay);
                self.host.schedule(timer, token, delay);
            }
            Effect::CancelTimer { timer } => self.host.cancel(timer),
            Effect::CountRegion { trigger } => {
                let words = self
                    .host
                    .region_text()
                    .map(|text| self.counter.count(&text));
                if words.is_none() {
                    match trigger {
                        CountTrigger::Poll => wc_trace!(
                            "content region not found (attempt {})",
                            self.state.poll_attempts() + 1
                        ),
                        CountTrigger::Mutation => {
                            wc_debug!("content region vanished; keeping last count")
                        }
                    }
                }
                self.inbox.push_back(Msg::RegionCounted { trigger, words });
            }
            Effect::ShowCount { count } => {
                wc_info!("Counted {} words in {}", count, self.host.location());
                self.badge.update(&mut self.host, &mut self.state, count);
            }
            Effect::ShowCopied { count } => {
                self.badge
                    .show_copied(&mut self.host, &mut self.state, count);
            }
            Effect::MoveBadge { to } => self.badge.move_to(&mut self.host, &mut self.state, to),
            Effect::SetCursor(cursor) => self.host.set_cursor(cursor),
            Effect::CapturePointer(pointer_id) => self.host.capture_pointer(pointer_id),
            Effect::ReleasePointer(pointer_id) => self.host.release_pointer(pointer_id),
            Effect::WriteClipboard(text) => {
                if let Err(err) = self.host.write_clipboard(&text) {
                    wc_debug!("clipboard write ignored: {}", err);
                }
            }
            Effect::AttachObserver => {
                if self.host.attach_observer() {
                    wc_info!("Observer attached to content region");
                } else {
                    wc_warn!("content region disappeared before the observer attached");
                }
            }
            Effect::BootstrapExhausted { attempts } => {
                wc_info!(
                    "No content region in {} after {} attempts; not watching",
                    self.host.location(),
                    attempts
                );
            }
        }
    }
}
