//! Optional overrides handed in by the extension loader as JSON.

use thiserror::Error;
use wordcount_core::CounterSettings;
use wordcount_engine::{HtmlPage, PageError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Selector(#[from] PageError),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("drag threshold must be a finite, non-negative pixel distance (got {0})")]
    DragThreshold(f64),
}

/// Parses `json` over the defaults. Blank input means "use the defaults".
pub fn parse_settings(json: &str) -> Result<CounterSettings, SettingsError> {
    if json.trim().is_empty() {
        return Ok(CounterSettings::default());
    }
    let settings: CounterSettings = serde_json::from_str(json)?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &CounterSettings) -> Result<(), SettingsError> {
    if settings.content_selector.trim().is_empty() {
        return Err(SettingsError::Empty {
            field: "content_selector",
        });
    }
    if settings.badge_id.trim().is_empty() {
        return Err(SettingsError::Empty { field: "badge_id" });
    }
    if !settings.drag_threshold_px.is_finite() || settings.drag_threshold_px < 0.0 {
        return Err(SettingsError::DragThreshold(settings.drag_threshold_px));
    }
    // Same selector engine rules as the headless page.
    HtmlPage::parse("", &settings.content_selector)?;
    Ok(())
}
