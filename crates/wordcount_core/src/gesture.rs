//! Drag-or-click disambiguation for the badge.
//!
//! One control acts as both a drag handle and a button: a press that travels
//! at least the threshold distance becomes a drag, anything shorter is a click.
use crate::ClickMode;

pub type PointerId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string; unknown types are treated as mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// Where a press started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub pointer_id: PointerId,
    /// Pointer position at press time.
    pub start: Point,
    /// Badge top-left corner at press time.
    pub origin: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Armed(Press),
    Dragging(Press),
}

/// What the caller must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    None,
    /// A press session started; capture the pointer when `capture` is set.
    Began { pointer_id: PointerId, capture: bool },
    /// Place the badge's top-left corner at `to`.
    Moved { to: Point },
    /// A drag finished; the release must not copy.
    DragEnded { pointer_id: PointerId, captured: bool },
    /// A press ended without crossing the threshold.
    Clicked { pointer_id: PointerId, captured: bool },
    /// The session was dropped without a click.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerGesture {
    phase: GesturePhase,
    threshold_px: f64,
    mode: ClickMode,
}

impl PointerGesture {
    pub fn new(threshold_px: f64, mode: ClickMode) -> Self {
        Self {
            phase: GesturePhase::Idle,
            threshold_px: threshold_px.max(0.0),
            mode,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    fn captures(&self) -> bool {
        self.mode == ClickMode::DragAndClick
    }

    fn active_press(&self, pointer_id: PointerId) -> Option<Press> {
        match self.phase {
            GesturePhase::Armed(press) | GesturePhase::Dragging(press)
                if press.pointer_id == pointer_id =>
            {
                Some(press)
            }
            _ => None,
        }
    }

    pub fn press(
        &mut self,
        pointer_id: PointerId,
        kind: PointerKind,
        button: i16,
        at: Point,
        origin: Point,
    ) -> GestureAction {
        if kind == PointerKind::Mouse && button != 0 {
            return GestureAction::None;
        }
        if self.phase != GesturePhase::Idle {
            return GestureAction::None;
        }
        self.phase = GesturePhase::Armed(Press {
            pointer_id,
            start: at,
            origin,
        });
        GestureAction::Began {
            pointer_id,
            capture: self.captures(),
        }
    }

    pub fn motion(&mut self, pointer_id: PointerId, at: Point) -> GestureAction {
        if self.mode == ClickMode::ClickOnly {
            return GestureAction::None;
        }
        let Some(press) = self.active_press(pointer_id) else {
            return GestureAction::None;
        };
        let dx = at.x - press.start.x;
        let dy = at.y - press.start.y;
        if !self.is_dragging() {
            if dx * dx + dy * dy < self.threshold_px * self.threshold_px {
                return GestureAction::None;
            }
            self.phase = GesturePhase::Dragging(press);
        }
        GestureAction::Moved {
            to: press.origin.translated(dx, dy),
        }
    }

    pub fn release(&mut self, pointer_id: PointerId) -> GestureAction {
        if self.active_press(pointer_id).is_none() {
            return GestureAction::None;
        }
        let was_dragging = self.is_dragging();
        self.phase = GesturePhase::Idle;
        let captured = self.captures();
        if was_dragging {
            GestureAction::DragEnded {
                pointer_id,
                captured,
            }
        } else {
            GestureAction::Clicked {
                pointer_id,
                captured,
            }
        }
    }

    pub fn capture_lost(&mut self, pointer_id: PointerId) -> GestureAction {
        if self.active_press(pointer_id).is_none() {
            return GestureAction::None;
        }
        self.phase = GesturePhase::Idle;
        GestureAction::Cancelled
    }
}
