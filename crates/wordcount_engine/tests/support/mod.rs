#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;
use std::sync::Once;
use std::time::Duration;

use wordcount_core::{BadgeCursor, CounterSettings, Msg, Point, PointerId, TimerKind, TimerToken};
use wordcount_engine::{ClipboardError, HtmlPage, OverlayDriver, PageHost};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordcount_logging::initialize_for_tests);
}

pub fn chapter(body: &str) -> String {
    format!(
        "<html><head><title>Chapter</title></head><body>\n\
         <div class=\"chapter-inner chapter-content\">\n{body}\n</div>\n</body></html>"
    )
}

pub const NO_CHAPTER: &str = "<html><body><div class=\"loading\">Loading…</div></body></html>";

#[derive(Debug, Clone, PartialEq)]
pub struct FakeBadge {
    pub id: String,
    pub title: String,
    pub text: String,
    pub data_count: Option<u64>,
    pub copied: bool,
    pub position: Option<Point>,
}

/// Headless document with a virtual clock.
pub struct FakeHost {
    pub page: HtmlPage,
    pub now: Duration,
    pub timers: BTreeMap<TimerKind, (TimerToken, Duration)>,
    /// Timers armed, and timers that left `timers` by firing, being
    /// cancelled or being replaced.
    pub timers_armed: usize,
    pub timers_released: usize,
    pub badge: Option<FakeBadge>,
    pub wired: usize,
    pub cursor: BadgeCursor,
    pub captured: Option<PointerId>,
    pub clipboard: Vec<String>,
    pub clipboard_fails: bool,
    pub observers: usize,
    pub region_reads: Cell<usize>,
}

impl FakeHost {
    pub fn new(markup: &str) -> Self {
        let selector = CounterSettings::default().content_selector;
        Self {
            page: HtmlPage::parse(markup, &selector).expect("default selector parses"),
            now: Duration::ZERO,
            timers: BTreeMap::new(),
            timers_armed: 0,
            timers_released: 0,
            badge: None,
            wired: 0,
            cursor: BadgeCursor::Grab,
            captured: None,
            clipboard: Vec::new(),
            clipboard_fails: false,
            observers: 0,
            region_reads: Cell::new(0),
        }
    }

    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_ref().map(|badge| badge.text.as_str())
    }
}

impl PageHost for FakeHost {
    fn location(&self) -> String {
        "https://example.test/fiction/1/chapter/2".to_string()
    }

    fn region_text(&self) -> Option<String> {
        self.region_reads.set(self.region_reads.get() + 1);
        self.page.region_text()
    }

    fn has_badge(&self, badge_id: &str) -> bool {
        self.badge.as_ref().is_some_and(|badge| badge.id == badge_id)
    }

    fn create_badge(&mut self, badge_id: &str, title: &str) {
        self.badge = Some(FakeBadge {
            id: badge_id.to_string(),
            title: title.to_string(),
            text: String::new(),
            data_count: None,
            copied: false,
            position: None,
        });
    }

    fn wire_badge(&mut self, _badge_id: &str) {
        self.wired += 1;
    }

    fn write_badge(&mut self, label: &str, count: u64, copied: bool) {
        if let Some(badge) = self.badge.as_mut() {
            badge.text = label.to_string();
            badge.data_count = Some(count);
            badge.copied = copied;
        }
    }

    fn move_badge(&mut self, to: Point) {
        if let Some(badge) = self.badge.as_mut() {
            badge.position = Some(to);
        }
    }

    fn set_cursor(&mut self, cursor: BadgeCursor) {
        self.cursor = cursor;
    }

    fn capture_pointer(&mut self, pointer_id: PointerId) {
        self.captured = Some(pointer_id);
    }

    fn release_pointer(&mut self, pointer_id: PointerId) {
        if self.captured == Some(pointer_id) {
            self.captured = None;
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard_fails {
            return Err(ClipboardError::Rejected("NotAllowedError".to_string()));
        }
        self.clipboard.push(text.to_string());
        Ok(())
    }

    fn attach_observer(&mut self) -> bool {
        if self.page.region().is_none() {
            return false;
        }
        self.observers += 1;
        true
    }

    fn schedule(&mut self, timer: TimerKind, token: TimerToken, delay: Duration) {
        self.timers_armed += 1;
        if self.timers.insert(timer, (token, self.now + delay)).is_some() {
            self.timers_released += 1;
        }
    }

    fn cancel(&mut self, timer: TimerKind) {
        if self.timers.remove(&timer).is_some() {
            self.timers_released += 1;
        }
    }
}

pub fn driver(markup: &str) -> OverlayDriver<FakeHost> {
    init_logging();
    OverlayDriver::new(CounterSettings::default(), FakeHost::new(markup))
}

/// Moves the virtual clock forward, firing due timers in order.
pub fn advance(driver: &mut OverlayDriver<FakeHost>, by: Duration) {
    let deadline = driver.host().now + by;
    loop {
        let next = driver
            .host()
            .timers
            .iter()
            .filter(|(_, (_, due))| *due <= deadline)
            .min_by_key(|(_, (_, due))| *due)
            .map(|(timer, (token, due))| (*timer, *token, *due));
        let Some((timer, token, due)) = next else {
            break;
        };
        driver.host_mut().timers.remove(&timer);
        driver.host_mut().timers_released += 1;
        driver.host_mut().now = due;
        driver.dispatch(Msg::TimerFired { timer, token });
    }
    driver.host_mut().now = deadline;
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
