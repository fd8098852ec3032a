//! Browser content script: one overlay runtime per reachable document.
mod dom;
mod events;
mod host;
mod logging;
mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlIFrameElement, Window};
use wordcount_core::CounterSettings;
use wordcount_logging::{wc_debug, wc_info, wc_warn};

use crate::settings::parse_settings;
use runtime::DocumentRuntime;

thread_local! {
    static RUNTIMES: RefCell<Vec<Rc<DocumentRuntime>>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn main() {
    logging::initialize();
}

/// Starts the overlay with default settings. Later calls are no-ops.
#[wasm_bindgen]
pub fn run() {
    launch(CounterSettings::default());
}

/// Starts the overlay with JSON overrides for `CounterSettings`.
#[wasm_bindgen(js_name = runWithSettings)]
pub fn run_with_settings(json: &str) -> Result<(), JsError> {
    let settings = parse_settings(json)?;
    launch(settings);
    Ok(())
}

fn launch(settings: CounterSettings) {
    if RUNTIMES.with(|runtimes| !runtimes.borrow().is_empty()) {
        wc_debug!("overlay already running");
        return;
    }
    match try_launch(settings) {
        Ok(documents) => wc_info!("overlay started in {} document(s)", documents),
        Err(err) => wc_warn!("overlay not started: {:#}", err),
    }
}

fn try_launch(settings: CounterSettings) -> anyhow::Result<usize> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("window has no document")?;
    let frames = same_origin_frames(&document);

    let mut started = vec![DocumentRuntime::launch(window, document, settings.clone())];
    started.extend(
        frames
            .into_iter()
            .map(|(window, document)| DocumentRuntime::launch(window, document, settings.clone())),
    );
    let count = started.len();
    RUNTIMES.with(|runtimes| runtimes.borrow_mut().extend(started));
    Ok(count)
}

/// Frames present at start whose documents this script may touch.
/// Cross-origin frames have no accessible document and are skipped.
fn same_origin_frames(document: &Document) -> Vec<(Window, Document)> {
    let frames = match document.query_selector_all("iframe") {
        Ok(frames) => frames,
        Err(err) => {
            wc_debug!("frame lookup failed: {:?}", err);
            return Vec::new();
        }
    };
    (0..frames.length())
        .filter_map(|index| frames.item(index))
        .filter_map(|node| {
            let frame = node.unchecked_into::<HtmlIFrameElement>();
            let window = frame.content_window()?;
            let document = frame.content_document()?;
            document.document_element()?;
            Some((window, document))
        })
        .collect()
}
