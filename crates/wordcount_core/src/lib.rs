//! Word counter core: pure per-document state machine and view-model helpers.
mod bootstrap;
mod effect;
mod gesture;
mod msg;
mod recount;
mod settings;
mod state;
mod update;
mod view_model;

pub use bootstrap::{Bootstrap, BootstrapPhase, PollOutcome};
pub use effect::{CountTrigger, Effect, TimerKind, TimerToken};
pub use gesture::{
    GestureAction, GesturePhase, Point, PointerGesture, PointerId, PointerKind, Press,
};
pub use msg::Msg;
pub use recount::{MutationBatch, MutationRecord, RecountScheduler};
pub use settings::{
    ClickMode, CounterSettings, RecountMode, DEFAULT_BADGE_ID, DEFAULT_CONTENT_SELECTOR,
};
pub use state::DocumentState;
pub use update::update;
pub use view_model::{BadgeCursor, BadgeLabel, BadgeView};
