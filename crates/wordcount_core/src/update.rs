use crate::gesture::GestureAction;
use crate::{
    BadgeCursor, ClickMode, CountTrigger, DocumentState, Effect, MutationBatch, Msg, PollOutcome,
    PointerId, TimerKind, TimerToken,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DocumentState, msg: Msg) -> (DocumentState, Vec<Effect>) {
    let effects = match msg {
        Msg::Start => {
            if state.bootstrap.begin() {
                vec![schedule_poll(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::TimerFired { timer, token } => on_timer(&mut state, timer, token),
        Msg::RegionCounted { trigger, words } => on_counted(&mut state, trigger, words),
        Msg::ContentMutated(batch) => on_mutation(&mut state, &batch),
        Msg::PointerDown {
            pointer_id,
            kind,
            button,
            at,
            badge_origin,
        } => {
            let action = state
                .gesture
                .press(pointer_id, kind, button, at, badge_origin);
            gesture_effects(&mut state, action)
        }
        Msg::PointerMoved { pointer_id, at } => {
            let action = state.gesture.motion(pointer_id, at);
            gesture_effects(&mut state, action)
        }
        Msg::PointerReleased { pointer_id } => {
            let action = state.gesture.release(pointer_id);
            gesture_effects(&mut state, action)
        }
        Msg::PointerCaptureLost { pointer_id } => {
            let action = state.gesture.capture_lost(pointer_id);
            gesture_effects(&mut state, action)
        }
    };

    (state, effects)
}

fn schedule_poll(state: &mut DocumentState) -> Effect {
    let token = state.next_token();
    state.poll_token = Some(token);
    Effect::ScheduleTimer {
        timer: TimerKind::Poll,
        token,
        delay: state.settings().poll_interval(),
    }
}

fn on_timer(state: &mut DocumentState, timer: TimerKind, token: TimerToken) -> Vec<Effect> {
    match timer {
        TimerKind::Poll => {
            if state.poll_token != Some(token) || !state.bootstrap.is_polling() {
                return Vec::new();
            }
            state.poll_token = None;
            vec![Effect::CountRegion {
                trigger: CountTrigger::Poll,
            }]
        }
        TimerKind::Recount => {
            if !state.recount.fire(token) || !state.bootstrap.is_watching() {
                return Vec::new();
            }
            vec![Effect::CountRegion {
                trigger: CountTrigger::Mutation,
            }]
        }
        TimerKind::CopiedFlash => {
            if state.copied_token != Some(token) {
                return Vec::new();
            }
            state.copied_token = None;
            state
                .count
                .map(|count| vec![Effect::ShowCount { count }])
                .unwrap_or_default()
        }
    }
}

fn on_counted(state: &mut DocumentState, trigger: CountTrigger, words: Option<u64>) -> Vec<Effect> {
    match trigger {
        CountTrigger::Poll => match state.bootstrap.record_attempt(words.is_some()) {
            PollOutcome::Found => {
                let mut effects = show_fresh_count(state, words);
                effects.push(Effect::AttachObserver);
                effects
            }
            PollOutcome::Retry => vec![schedule_poll(state)],
            PollOutcome::GaveUp { attempts } => vec![Effect::BootstrapExhausted { attempts }],
            PollOutcome::Ignored => Vec::new(),
        },
        // A vanished region keeps the last count on display.
        CountTrigger::Mutation if state.bootstrap.is_watching() => show_fresh_count(state, words),
        CountTrigger::Mutation => Vec::new(),
    }
}

/// A new count always wins over a pending "Copied" flash.
fn show_fresh_count(state: &mut DocumentState, words: Option<u64>) -> Vec<Effect> {
    let Some(count) = words else {
        return Vec::new();
    };
    state.count = Some(count);
    let mut effects = Vec::with_capacity(2);
    if state.copied_token.take().is_some() {
        effects.push(Effect::CancelTimer {
            timer: TimerKind::CopiedFlash,
        });
    }
    effects.push(Effect::ShowCount { count });
    effects
}

fn on_mutation(state: &mut DocumentState, batch: &MutationBatch) -> Vec<Effect> {
    if !state.bootstrap.is_watching() || batch.touches(&state.settings().badge_id) {
        return Vec::new();
    }
    let token = state.next_token();
    match state.recount.arm(token) {
        Some(token) => vec![Effect::ScheduleTimer {
            timer: TimerKind::Recount,
            token,
            delay: state.settings().recount_delay(),
        }],
        None => Vec::new(),
    }
}

fn gesture_effects(state: &mut DocumentState, action: GestureAction) -> Vec<Effect> {
    let draggable = state.settings().click_mode == ClickMode::DragAndClick;
    match action {
        GestureAction::None => Vec::new(),
        GestureAction::Began {
            pointer_id,
            capture,
        } => {
            if capture {
                vec![
                    Effect::CapturePointer(pointer_id),
                    Effect::SetCursor(BadgeCursor::Grabbing),
                ]
            } else {
                Vec::new()
            }
        }
        GestureAction::Moved { to } => {
            state.position = Some(to);
            vec![Effect::MoveBadge { to }]
        }
        GestureAction::DragEnded {
            pointer_id,
            captured,
        } => end_press(pointer_id, captured),
        GestureAction::Clicked {
            pointer_id,
            captured,
        } => {
            let mut effects = end_press(pointer_id, captured);
            effects.extend(copy_count(state));
            effects
        }
        GestureAction::Cancelled => {
            if draggable {
                vec![Effect::SetCursor(BadgeCursor::Grab)]
            } else {
                Vec::new()
            }
        }
    }
}

fn end_press(pointer_id: PointerId, captured: bool) -> Vec<Effect> {
    if captured {
        vec![
            Effect::ReleasePointer(pointer_id),
            Effect::SetCursor(BadgeCursor::Grab),
        ]
    } else {
        Vec::new()
    }
}

fn copy_count(state: &mut DocumentState) -> Vec<Effect> {
    let Some(count) = state.count else {
        return Vec::new();
    };
    let token = state.next_token();
    state.copied_token = Some(token);
    vec![
        Effect::WriteClipboard(count.to_string()),
        Effect::ShowCopied { count },
        Effect::ScheduleTimer {
            timer: TimerKind::CopiedFlash,
            token,
            delay: state.settings().copied_flash(),
        },
    ]
}
