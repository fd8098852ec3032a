//! Word counter overlay: the browser content script.
//!
//! Everything touching the DOM lives in `platform` and only builds for
//! `wasm32`; settings parsing is shared so it can be tested natively.
mod settings;

pub use settings::{parse_settings, SettingsError};

#[cfg(target_arch = "wasm32")]
mod platform;
