use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use web_sys::{Document, Window};
use wordcount_core::{CounterSettings, Msg, TimerKind, TimerToken};
use wordcount_engine::OverlayDriver;
use wordcount_logging::wc_trace;

use super::host::WebHost;

/// Per-document runtime shared by every JS callback of that document.
///
/// Callbacks only queue messages; the queue is drained by whichever caller
/// manages to borrow the driver, so a callback fired while an effect is
/// executing never re-enters the driver.
pub(crate) struct DocumentRuntime {
    driver: RefCell<OverlayDriver<WebHost>>,
    inbox: RefCell<VecDeque<Msg>>,
}

impl DocumentRuntime {
    pub(crate) fn launch(
        window: Window,
        document: Document,
        settings: CounterSettings,
    ) -> Rc<Self> {
        let runtime = Rc::new_cyclic(|weak: &Weak<Self>| {
            let host = WebHost::new(window, document, &settings, weak.clone());
            Self {
                driver: RefCell::new(OverlayDriver::new(settings, host)),
                inbox: RefCell::new(VecDeque::new()),
            }
        });
        runtime.post(Msg::Start);
        runtime
    }

    pub(crate) fn post(&self, msg: Msg) {
        self.inbox.borrow_mut().push_back(msg);
        self.pump();
    }

    /// Timer callbacks land here: the host forgets the spent timer before the
    /// firing is dispatched, which may arm the same kind again.
    pub(crate) fn timer_fired(&self, timer: TimerKind, token: TimerToken) {
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.host_mut().forget_timer(timer, token);
        }
        self.post(Msg::TimerFired { timer, token });
    }

    fn pump(&self) {
        let Ok(mut driver) = self.driver.try_borrow_mut() else {
            wc_trace!("driver busy, message queued");
            return;
        };
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            match next {
                Some(msg) => driver.dispatch(msg),
                None => break,
            }
        }
    }
}

/// Posts to a runtime that may already be gone (document unloaded).
pub(crate) fn post(runtime: &Weak<DocumentRuntime>, msg: Msg) {
    if let Some(runtime) = runtime.upgrade() {
        runtime.post(msg);
    }
}
