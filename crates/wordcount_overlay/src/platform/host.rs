use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;

use anyhow::{anyhow, Context};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, MutationObserver, MutationObserverInit, Node, Window,
};
use wordcount_core::{
    BadgeCursor, CounterSettings, Msg, Point, PointerId, TimerKind, TimerToken,
};
use wordcount_engine::{visible_text, ClipboardError, PageHost};
use wordcount_logging::{wc_debug, wc_warn};

use super::dom::LiveTree;
use super::events::{self, PointerListeners};
use super::runtime::{post, DocumentRuntime};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// A `setTimeout` in flight. The callback lives here so cancelling or
/// replacing the timer frees it.
struct PendingTimer {
    handle: i32,
    token: TimerToken,
    _callback: Closure<dyn FnMut()>,
}

/// `PageHost` over one browser document (main page or same-origin frame).
pub(crate) struct WebHost {
    window: Window,
    document: Document,
    selector: String,
    badge_id: String,
    runtime: Weak<DocumentRuntime>,
    badge: Option<HtmlElement>,
    timers: HashMap<TimerKind, PendingTimer>,
    listeners: Option<PointerListeners>,
    observer: Option<(MutationObserver, ObserverCallback)>,
    clipboard_sink: Closure<dyn FnMut(JsValue)>,
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

impl WebHost {
    pub(crate) fn new(
        window: Window,
        document: Document,
        settings: &CounterSettings,
        runtime: Weak<DocumentRuntime>,
    ) -> Self {
        Self {
            window,
            document,
            selector: settings.content_selector.clone(),
            badge_id: settings.badge_id.clone(),
            runtime,
            badge: None,
            timers: HashMap::new(),
            listeners: None,
            observer: None,
            // Clipboard rejections arrive asynchronously and are dropped here.
            clipboard_sink: Closure::new(|err: JsValue| {
                wc_debug!("clipboard write rejected: {:?}", err);
            }),
        }
    }

    fn region(&self) -> Option<Element> {
        match self.document.query_selector(&self.selector) {
            Ok(region) => region,
            Err(err) => {
                wc_warn!("content selector `{}` rejected: {:?}", self.selector, err);
                None
            }
        }
    }

    fn badge_element(&self) -> Option<HtmlElement> {
        self.badge.clone().or_else(|| {
            self.document
                .get_element_by_id(&self.badge_id)
                .map(|element| element.unchecked_into::<HtmlElement>())
        })
    }

    fn try_create_badge(&mut self, badge_id: &str, title: &str) -> anyhow::Result<()> {
        let element = self.document.create_element("div").map_err(js_error)?;
        element.set_id(badge_id);
        element.set_attribute("title", title).map_err(js_error)?;
        let parent: Node = match self.document.body() {
            Some(body) => body.into(),
            None => self
                .document
                .document_element()
                .context("document has no root element")?
                .into(),
        };
        parent.append_child(&element).map_err(js_error)?;
        self.badge = Some(element.unchecked_into::<HtmlElement>());
        Ok(())
    }

    fn try_attach_observer(&mut self) -> anyhow::Result<bool> {
        let Some(region) = self.region() else {
            return Ok(false);
        };
        let runtime = self.runtime.clone();
        let callback: ObserverCallback = Closure::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                post(&runtime, Msg::ContentMutated(events::mutation_batch(&records)));
            },
        );
        let observer =
            MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_character_data(true);
        init.set_subtree(true);
        observer
            .observe_with_options(&region, &init)
            .map_err(js_error)?;
        if let Some((previous, _)) = self.observer.replace((observer, callback)) {
            previous.disconnect();
        }
        Ok(true)
    }

    /// Drops the bookkeeping of a timer that just fired, unless it was
    /// already replaced by a newer one.
    pub(crate) fn forget_timer(&mut self, timer: TimerKind, token: TimerToken) {
        if self
            .timers
            .get(&timer)
            .is_some_and(|pending| pending.token == token)
        {
            self.timers.remove(&timer);
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(badge) = self.badge_element() {
            if let Err(err) = badge.style().set_property(property, value) {
                wc_debug!("style {} not applied: {:?}", property, err);
            }
        }
    }
}

impl PageHost for WebHost {
    fn location(&self) -> String {
        self.document
            .location()
            .and_then(|location| location.href().ok())
            .unwrap_or_default()
    }

    fn region_text(&self) -> Option<String> {
        let region: Node = self.region()?.into();
        Some(visible_text(&LiveTree::new(&self.window), &region))
    }

    fn has_badge(&self, badge_id: &str) -> bool {
        self.document.get_element_by_id(badge_id).is_some()
    }

    fn create_badge(&mut self, badge_id: &str, title: &str) {
        if let Err(err) = self.try_create_badge(badge_id, title) {
            wc_warn!("badge not created: {:#}", err);
        }
    }

    fn wire_badge(&mut self, badge_id: &str) {
        let Some(badge) = self
            .badge_element()
            .filter(|badge| badge.id() == badge_id)
        else {
            return;
        };
        if badge.get_attribute("data-drag-attached").as_deref() == Some("1") {
            return;
        }
        match PointerListeners::attach(&badge, self.runtime.clone()) {
            Ok(listeners) => {
                if let Err(err) = badge.set_attribute("data-drag-attached", "1") {
                    wc_debug!("badge not marked as wired: {:?}", err);
                }
                if self.listeners.replace(listeners).is_some() {
                    wc_debug!("badge listeners replaced");
                }
                self.set_cursor(BadgeCursor::Grab);
            }
            Err(err) => wc_warn!("badge interaction not wired: {:#}", err),
        }
    }

    fn write_badge(&mut self, label: &str, count: u64, copied: bool) {
        let Some(badge) = self.badge_element() else {
            return;
        };
        if let Err(err) = badge.set_attribute("data-count", &count.to_string()) {
            wc_debug!("data-count not written: {:?}", err);
        }
        badge.set_text_content(Some(label));
        let classes = badge.class_list();
        let toggled = if copied {
            classes.add_1("copied")
        } else {
            classes.remove_1("copied")
        };
        if let Err(err) = toggled {
            wc_debug!("copied class not toggled: {:?}", err);
        }
    }

    fn move_badge(&mut self, to: Point) {
        self.set_style("left", &format!("{}px", to.x));
        self.set_style("top", &format!("{}px", to.y));
        self.set_style("right", "auto");
        self.set_style("bottom", "auto");
    }

    fn set_cursor(&mut self, cursor: BadgeCursor) {
        self.set_style("cursor", cursor.css());
    }

    fn capture_pointer(&mut self, pointer_id: PointerId) {
        if let Some(badge) = self.badge_element() {
            if let Err(err) = badge.set_pointer_capture(pointer_id) {
                wc_debug!("pointer {} not captured: {:?}", pointer_id, err);
            }
        }
    }

    fn release_pointer(&mut self, pointer_id: PointerId) {
        if let Some(badge) = self.badge_element() {
            if let Err(err) = badge.release_pointer_capture(pointer_id) {
                wc_debug!("pointer {} not released: {:?}", pointer_id, err);
            }
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let navigator = self.window.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
            .ok_or(ClipboardError::Unavailable)?;
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|method| method.dyn_into::<Function>().ok())
            .ok_or(ClipboardError::Unavailable)?;
        let pending = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))?;
        if let Ok(promise) = pending.dyn_into::<Promise>() {
            let _ = promise.catch(&self.clipboard_sink);
        }
        Ok(())
    }

    fn attach_observer(&mut self) -> bool {
        match self.try_attach_observer() {
            Ok(attached) => attached,
            Err(err) => {
                wc_warn!("mutation observer not attached: {:#}", err);
                false
            }
        }
    }

    fn schedule(&mut self, timer: TimerKind, token: TimerToken, delay: Duration) {
        self.cancel(timer);
        let runtime = self.runtime.clone();
        let callback: Closure<dyn FnMut()> = Closure::new(move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.timer_fired(timer, token);
            }
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                self.timers.insert(
                    timer,
                    PendingTimer {
                        handle,
                        token,
                        _callback: callback,
                    },
                );
            }
            Err(err) => wc_warn!("{:?} timer not scheduled: {:?}", timer, err),
        }
    }

    fn cancel(&mut self, timer: TimerKind) {
        if let Some(pending) = self.timers.remove(&timer) {
            self.window.clear_timeout_with_handle(pending.handle);
        }
    }
}
