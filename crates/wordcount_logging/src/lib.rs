#![deny(missing_docs)]
//! Shared logging utilities for the word counter workspace.
//!
//! This crate provides the `wc_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line carries
//! the [`LOG_PREFIX`] tag so the overlay's output is easy to pick out of a
//! busy browser console.

#[doc(hidden)]
pub use log as __log;

/// Tag prepended to every diagnostic line.
pub const LOG_PREFIX: &str = "[WordCounter]";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! wc_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("{} {}", $crate::LOG_PREFIX, format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! wc_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("{} {}", $crate::LOG_PREFIX, format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! wc_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("{} {}", $crate::LOG_PREFIX, format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! wc_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("{} {}", $crate::LOG_PREFIX, format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! wc_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("{} {}", $crate::LOG_PREFIX, format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
