use std::time::Duration;

use wordcount_core::{
    update, BadgeCursor, BadgeLabel, ClickMode, CountTrigger, CounterSettings, DocumentState,
    Effect, Msg, Point, PointerKind, TimerKind, TimerToken,
};

fn watching(settings: CounterSettings, count: u64) -> DocumentState {
    let (state, _) = update(DocumentState::new(settings), Msg::Start);
    let (state, _) = update(
        state,
        Msg::TimerFired {
            timer: TimerKind::Poll,
            token: 1,
        },
    );
    let (state, _) = update(
        state,
        Msg::RegionCounted {
            trigger: CountTrigger::Poll,
            words: Some(count),
        },
    );
    state
}

fn press(state: DocumentState, x: f64, y: f64) -> (DocumentState, Vec<Effect>) {
    update(
        state,
        Msg::PointerDown {
            pointer_id: 1,
            kind: PointerKind::Mouse,
            button: 0,
            at: Point::new(x, y),
            badge_origin: Point::new(600.0, 400.0),
        },
    )
}

fn move_to(state: DocumentState, x: f64, y: f64) -> (DocumentState, Vec<Effect>) {
    update(
        state,
        Msg::PointerMoved {
            pointer_id: 1,
            at: Point::new(x, y),
        },
    )
}

fn release(state: DocumentState) -> (DocumentState, Vec<Effect>) {
    update(state, Msg::PointerReleased { pointer_id: 1 })
}

fn clipboard_writes(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::WriteClipboard(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn flash_token(effects: &[Effect]) -> Option<TimerToken> {
    effects.iter().find_map(|effect| match effect {
        Effect::ScheduleTimer {
            timer: TimerKind::CopiedFlash,
            token,
            ..
        } => Some(*token),
        _ => None,
    })
}

#[test]
fn press_captures_pointer() {
    let (_, effects) = press(watching(CounterSettings::default(), 5), 610.0, 410.0);
    assert_eq!(
        effects,
        vec![
            Effect::CapturePointer(1),
            Effect::SetCursor(BadgeCursor::Grabbing)
        ]
    );
}

#[test]
fn drag_moves_badge_by_pointer_delta_without_copy() {
    let state = watching(CounterSettings::default(), 5);
    let (state, _) = press(state, 610.0, 410.0);
    let (state, small) = move_to(state, 612.0, 411.0);
    assert!(small.is_empty());

    let (state, effects) = move_to(state, 640.0, 398.0);
    assert_eq!(
        effects,
        vec![Effect::MoveBadge {
            to: Point::new(630.0, 388.0)
        }]
    );
    assert!(state.view().dragging);

    // Once dragging, even small moves reposition.
    let (state, effects) = move_to(state, 611.0, 411.0);
    assert_eq!(
        effects,
        vec![Effect::MoveBadge {
            to: Point::new(601.0, 401.0)
        }]
    );

    let (state, effects) = release(state);
    assert_eq!(
        effects,
        vec![
            Effect::ReleasePointer(1),
            Effect::SetCursor(BadgeCursor::Grab)
        ]
    );
    assert!(clipboard_writes(&effects).is_empty());
    assert_eq!(state.view().position, Some(Point::new(601.0, 401.0)));
    assert_eq!(state.view().label, Some(BadgeLabel::Words(5)));
}

#[test]
fn click_copies_once_and_reverts_after_flash() {
    let state = watching(CounterSettings::default(), 1234);
    let (state, _) = press(state, 610.0, 410.0);
    let (state, _) = move_to(state, 613.0, 412.0);
    let (state, effects) = release(state);

    assert_eq!(clipboard_writes(&effects), vec!["1234".to_string()]);
    assert!(effects.contains(&Effect::ShowCopied { count: 1234 }));
    assert!(effects.contains(&Effect::ScheduleTimer {
        timer: TimerKind::CopiedFlash,
        token: flash_token(&effects).unwrap(),
        delay: Duration::from_millis(900),
    }));
    assert_eq!(state.view().label, Some(BadgeLabel::Copied(1234)));
    assert_eq!(BadgeLabel::Copied(1234).to_string(), "Copied: 1234");

    let token = flash_token(&effects).unwrap();
    let (state, effects) = update(
        state,
        Msg::TimerFired {
            timer: TimerKind::CopiedFlash,
            token,
        },
    );
    assert_eq!(effects, vec![Effect::ShowCount { count: 1234 }]);
    assert_eq!(state.view().label, Some(BadgeLabel::Words(1234)));
}

#[test]
fn second_click_restarts_flash() {
    let state = watching(CounterSettings::default(), 3);
    let (state, _) = press(state, 0.0, 0.0);
    let (state, first) = release(state);
    let (state, _) = press(state, 0.0, 0.0);
    let (state, second) = release(state);

    let stale = flash_token(&first).unwrap();
    let live = flash_token(&second).unwrap();
    let (state, effects) = update(
        state,
        Msg::TimerFired {
            timer: TimerKind::CopiedFlash,
            token: stale,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().label, Some(BadgeLabel::Copied(3)));

    let (_, effects) = update(
        state,
        Msg::TimerFired {
            timer: TimerKind::CopiedFlash,
            token: live,
        },
    );
    assert_eq!(effects, vec![Effect::ShowCount { count: 3 }]);
}

#[test]
fn fresh_count_ends_copied_flash() {
    let state = watching(CounterSettings::default(), 3);
    let (state, _) = press(state, 0.0, 0.0);
    let (state, _) = release(state);
    let (state, effects) = update(
        state,
        Msg::RegionCounted {
            trigger: CountTrigger::Mutation,
            words: Some(4),
        },
    );
    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer {
                timer: TimerKind::CopiedFlash
            },
            Effect::ShowCount { count: 4 }
        ]
    );
    assert_eq!(state.view().label, Some(BadgeLabel::Words(4)));
}

#[test]
fn lost_capture_cancels_without_copy() {
    let state = watching(CounterSettings::default(), 9);
    let (state, _) = press(state, 0.0, 0.0);
    let (state, effects) = update(state, Msg::PointerCaptureLost { pointer_id: 1 });
    assert_eq!(effects, vec![Effect::SetCursor(BadgeCursor::Grab)]);

    let (_, effects) = release(state);
    assert!(effects.is_empty());
}

#[test]
fn right_click_does_nothing() {
    let state = watching(CounterSettings::default(), 9);
    let (state, effects) = update(
        state,
        Msg::PointerDown {
            pointer_id: 1,
            kind: PointerKind::Mouse,
            button: 2,
            at: Point::default(),
            badge_origin: Point::default(),
        },
    );
    assert!(effects.is_empty());
    let (_, effects) = release(state);
    assert!(effects.is_empty());
}

#[test]
fn click_only_mode_copies_on_any_release() {
    let settings = CounterSettings {
        click_mode: ClickMode::ClickOnly,
        ..CounterSettings::default()
    };
    let state = watching(settings, 77);
    let (state, effects) = press(state, 0.0, 0.0);
    assert!(effects.is_empty());
    let (state, effects) = move_to(state, 300.0, 300.0);
    assert!(effects.is_empty());
    let (state, effects) = release(state);

    assert_eq!(clipboard_writes(&effects), vec!["77".to_string()]);
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::ReleasePointer(_) | Effect::SetCursor(_))));
    assert_eq!(state.view().position, None);
}
