/// Lifecycle of the discovery loop for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapPhase {
    #[default]
    Idle,
    /// Polling for the content region.
    Polling,
    /// Region found; mutation watching took over.
    Watching,
    /// Attempt budget spent without a region. Terminal.
    Exhausted,
}

/// Outcome of one poll attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Found,
    Retry,
    GaveUp { attempts: u32 },
    /// Attempt arrived outside the polling phase.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    phase: BootstrapPhase,
    attempts: u32,
    max_attempts: u32,
}

impl Bootstrap {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            phase: BootstrapPhase::Idle,
            attempts: 0,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns true on the first call only.
    pub fn begin(&mut self) -> bool {
        if self.phase != BootstrapPhase::Idle {
            return false;
        }
        self.phase = BootstrapPhase::Polling;
        true
    }

    pub fn is_polling(&self) -> bool {
        self.phase == BootstrapPhase::Polling
    }

    pub fn is_watching(&self) -> bool {
        self.phase == BootstrapPhase::Watching
    }

    /// Records one attempt; `found` is whether the region produced a count.
    pub fn record_attempt(&mut self, found: bool) -> PollOutcome {
        if !self.is_polling() {
            return PollOutcome::Ignored;
        }
        self.attempts += 1;
        if found {
            self.phase = BootstrapPhase::Watching;
            PollOutcome::Found
        } else if self.attempts >= self.max_attempts {
            self.phase = BootstrapPhase::Exhausted;
            PollOutcome::GaveUp {
                attempts: self.attempts,
            }
        } else {
            PollOutcome::Retry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bootstrap, BootstrapPhase, PollOutcome};

    #[test]
    fn begin_only_once() {
        let mut boot = Bootstrap::new(3);
        assert!(boot.begin());
        assert!(!boot.begin());
        assert_eq!(boot.phase(), BootstrapPhase::Polling);
    }

    #[test]
    fn gives_up_after_budget() {
        let mut boot = Bootstrap::new(3);
        boot.begin();
        assert_eq!(boot.record_attempt(false), PollOutcome::Retry);
        assert_eq!(boot.record_attempt(false), PollOutcome::Retry);
        assert_eq!(
            boot.record_attempt(false),
            PollOutcome::GaveUp { attempts: 3 }
        );
        assert_eq!(boot.record_attempt(true), PollOutcome::Ignored);
        assert_eq!(boot.attempts(), 3);
    }

    #[test]
    fn zero_budget_still_polls_once() {
        let mut boot = Bootstrap::new(0);
        boot.begin();
        assert_eq!(
            boot.record_attempt(false),
            PollOutcome::GaveUp { attempts: 1 }
        );
    }
}
