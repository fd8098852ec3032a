use crate::{CountTrigger, MutationBatch, Point, PointerId, PointerKind, TimerKind, TimerToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Script injected into the document; begin polling for the content region.
    Start,
    /// A timer scheduled through `Effect::ScheduleTimer` elapsed.
    TimerFired { timer: TimerKind, token: TimerToken },
    /// Result of an `Effect::CountRegion`; `None` when the region is absent.
    RegionCounted {
        trigger: CountTrigger,
        words: Option<u64>,
    },
    /// The observer delivered a batch of changes under the content region.
    ContentMutated(MutationBatch),
    /// Pointer pressed on the badge.
    PointerDown {
        pointer_id: PointerId,
        kind: PointerKind,
        button: i16,
        at: Point,
        /// Badge's on-screen top-left corner at press time.
        badge_origin: Point,
    },
    PointerMoved { pointer_id: PointerId, at: Point },
    PointerReleased { pointer_id: PointerId },
    /// The browser took the capture away (or it was released).
    PointerCaptureLost { pointer_id: PointerId },
}
