use std::time::Duration;

use crate::{BadgeCursor, Point, PointerId};

/// Identifies one of the document's single-instance timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Bootstrap poll for the content region.
    Poll,
    /// Debounced recount after content mutations.
    Recount,
    /// Revert of the transient "Copied" label.
    CopiedFlash,
}

/// Monotonic stamp attached to a scheduled timer; stale firings are ignored.
pub type TimerToken = u64;

/// Why a count was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTrigger {
    Poll,
    Mutation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Arm `timer`, replacing any pending instance of the same kind.
    ScheduleTimer {
        timer: TimerKind,
        token: TimerToken,
        delay: Duration,
    },
    CancelTimer { timer: TimerKind },
    /// Read the region's visible text, count it and report `Msg::RegionCounted`.
    CountRegion { trigger: CountTrigger },
    /// Render `Words: {count}` and store the raw count on the badge.
    ShowCount { count: u64 },
    /// Render `Copied: {count}` with the copied styling.
    ShowCopied { count: u64 },
    /// Position the badge at explicit viewport coordinates.
    MoveBadge { to: Point },
    SetCursor(BadgeCursor),
    CapturePointer(PointerId),
    ReleasePointer(PointerId),
    WriteClipboard(String),
    /// Start watching the content region for mutations.
    AttachObserver,
    /// Polling ran out of attempts without finding the region.
    BootstrapExhausted { attempts: u32 },
}
