use wordcount_core::{BadgeLabel, CounterSettings, DocumentState, Point};

use crate::host::PageHost;

/// Owns the lifecycle of the single overlay element of a document.
///
/// Every write is bracketed by the document's self-update guard so the
/// mutation watcher does not read the badge's own changes as page content.
#[derive(Debug, Clone)]
pub struct BadgeController {
    id: String,
    title: String,
}

impl BadgeController {
    pub fn new(settings: &CounterSettings) -> Self {
        Self {
            id: settings.badge_id.clone(),
            title: settings.badge_title.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creates and wires the badge unless it already exists. Returns whether a
    /// badge was created.
    pub fn ensure<H: PageHost>(&self, host: &mut H) -> bool {
        if host.has_badge(&self.id) {
            return false;
        }
        host.create_badge(&self.id, &self.title);
        host.wire_badge(&self.id);
        true
    }

    pub fn update<H: PageHost>(&self, host: &mut H, state: &mut DocumentState, count: u64) {
        self.write(host, state, BadgeLabel::Words(count), count, false);
    }

    pub fn show_copied<H: PageHost>(&self, host: &mut H, state: &mut DocumentState, count: u64) {
        self.write(host, state, BadgeLabel::Copied(count), count, true);
    }

    pub fn move_to<H: PageHost>(&self, host: &mut H, state: &mut DocumentState, to: Point) {
        state.set_self_updating(true);
        host.move_badge(to);
        state.set_self_updating(false);
    }

    fn write<H: PageHost>(
        &self,
        host: &mut H,
        state: &mut DocumentState,
        label: BadgeLabel,
        count: u64,
        copied: bool,
    ) {
        state.set_self_updating(true);
        self.ensure(host);
        host.write_badge(&label.to_string(), count, copied);
        state.set_self_updating(false);
    }
}
