use std::time::Duration;

use wordcount_core::{ClickMode, CounterSettings, RecountMode, DEFAULT_CONTENT_SELECTOR};

#[test]
fn defaults_match_supported_layout() {
    let settings = CounterSettings::default();
    assert_eq!(settings.content_selector, DEFAULT_CONTENT_SELECTOR);
    assert_eq!(settings.badge_id, "oswc-badge");
    assert_eq!(settings.poll_interval(), Duration::from_millis(300));
    assert_eq!(settings.max_poll_attempts, 20);
    assert_eq!(settings.recount_delay(), Duration::from_millis(250));
    assert_eq!(settings.copied_flash(), Duration::from_millis(900));
    assert_eq!(settings.drag_threshold_px, 5.0);
}

#[test]
fn partial_json_keeps_defaults() {
    let settings: CounterSettings = serde_json::from_str(
        r#"{ "recount_mode": "single_flight", "click_mode": "click_only", "max_poll_attempts": 3 }"#,
    )
    .unwrap();
    assert_eq!(settings.recount_mode, RecountMode::SingleFlight);
    assert_eq!(settings.click_mode, ClickMode::ClickOnly);
    assert_eq!(settings.max_poll_attempts, 3);
    assert_eq!(settings.content_selector, DEFAULT_CONTENT_SELECTOR);
}
