use crate::{RecountMode, TimerToken};

/// One observed change, reduced to what the feedback filter needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationRecord {
    /// Id of the mutated node when it is an element with an id.
    pub target_id: Option<String>,
    /// Ids of added element nodes (elements without an id are omitted).
    pub added_ids: Vec<String>,
}

impl MutationRecord {
    pub fn on(target_id: impl Into<String>) -> Self {
        Self {
            target_id: Some(target_id.into()),
            added_ids: Vec::new(),
        }
    }

    fn involves(&self, id: &str) -> bool {
        self.target_id.as_deref() == Some(id) || self.added_ids.iter().any(|added| added == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationBatch(pub Vec<MutationRecord>);

impl MutationBatch {
    pub fn new(records: Vec<MutationRecord>) -> Self {
        Self(records)
    }

    /// A single anonymous text change somewhere under the region.
    pub fn text_change() -> Self {
        Self(vec![MutationRecord::default()])
    }

    pub fn touches(&self, badge_id: &str) -> bool {
        self.0.iter().any(|record| record.involves(badge_id))
    }
}

/// Debounce bookkeeping for mutation-triggered recounts.
///
/// Holds at most one pending timer token. `self_updating` is raised while the
/// badge is written so the observer's echo of that write is not mistaken for
/// page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecountScheduler {
    mode: RecountMode,
    pending: Option<TimerToken>,
    self_updating: bool,
}

impl RecountScheduler {
    pub fn new(mode: RecountMode) -> Self {
        Self {
            mode,
            pending: None,
            self_updating: false,
        }
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn is_self_updating(&self) -> bool {
        self.self_updating
    }

    pub fn set_self_updating(&mut self, updating: bool) {
        self.self_updating = updating;
    }

    /// Arms the recount timer with `token`. Returns the token to schedule, or
    /// `None` when nothing new must be scheduled.
    pub fn arm(&mut self, token: TimerToken) -> Option<TimerToken> {
        if self.self_updating {
            return None;
        }
        if self.pending.is_some() && self.mode == RecountMode::SingleFlight {
            return None;
        }
        self.pending = Some(token);
        Some(token)
    }

    /// Consumes the pending timer if `token` is the live one.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
