//! Console logging for the content script.
//!
//! Lines go to the page's devtools console through `wasm-logger`; panics are
//! routed there too instead of surfacing as an opaque `unreachable`.

use log::Level;

/// Initialize the console logger and the panic hook.
///
/// Debug builds log at debug level, release builds at info.
pub fn initialize() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    // A second init only reports to the console; it never fails the script.
    wasm_logger::init(wasm_logger::Config::new(level));
}
