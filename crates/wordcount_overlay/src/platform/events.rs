use std::rc::Weak;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node, PointerEvent};
use wordcount_core::{MutationBatch, MutationRecord, Msg, Point, PointerKind};

use super::dom::as_element;
use super::host::js_error;
use super::runtime::{post, DocumentRuntime};

type PointerCallback = Closure<dyn FnMut(PointerEvent)>;

/// Pointer handlers registered on the badge. Dropping this would invalidate
/// the JS callbacks, so the host keeps it for the badge's lifetime.
pub(crate) struct PointerListeners {
    _callbacks: Vec<PointerCallback>,
}

impl PointerListeners {
    pub(crate) fn attach(
        badge: &HtmlElement,
        runtime: Weak<DocumentRuntime>,
    ) -> anyhow::Result<Self> {
        let down = {
            let runtime = runtime.clone();
            let badge = badge.clone();
            PointerCallback::new(move |event: PointerEvent| {
                let kind = PointerKind::from_dom(&event.pointer_type());
                let rect = badge.get_bounding_client_rect();
                post(
                    &runtime,
                    Msg::PointerDown {
                        pointer_id: event.pointer_id(),
                        kind,
                        button: event.button(),
                        at: client_point(&event),
                        badge_origin: Point::new(rect.left(), rect.top()),
                    },
                );
                if kind != PointerKind::Mouse || event.button() == 0 {
                    event.prevent_default();
                }
            })
        };
        let moved = {
            let runtime = runtime.clone();
            let badge = badge.clone();
            PointerCallback::new(move |event: PointerEvent| {
                post(
                    &runtime,
                    Msg::PointerMoved {
                        pointer_id: event.pointer_id(),
                        at: client_point(&event),
                    },
                );
                if badge.has_pointer_capture(event.pointer_id()) {
                    event.prevent_default();
                }
            })
        };
        let released = {
            let runtime = runtime.clone();
            PointerCallback::new(move |event: PointerEvent| {
                post(
                    &runtime,
                    Msg::PointerReleased {
                        pointer_id: event.pointer_id(),
                    },
                );
            })
        };
        let lost = PointerCallback::new(move |event: PointerEvent| {
            post(
                &runtime,
                Msg::PointerCaptureLost {
                    pointer_id: event.pointer_id(),
                },
            );
        });

        let callbacks = vec![down, moved, released, lost];
        let names = ["pointerdown", "pointermove", "pointerup", "lostpointercapture"];
        for (name, callback) in names.iter().zip(&callbacks) {
            badge
                .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
                .map_err(js_error)?;
        }
        Ok(Self {
            _callbacks: callbacks,
        })
    }
}

fn client_point(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Reduces observer records to the ids the feedback filter looks at.
pub(crate) fn mutation_batch(records: &js_sys::Array) -> MutationBatch {
    let records = records
        .iter()
        .map(|value| value.unchecked_into::<web_sys::MutationRecord>())
        .map(|record| {
            let added = record.added_nodes();
            MutationRecord {
                target_id: record.target().as_ref().and_then(element_id),
                added_ids: (0..added.length())
                    .filter_map(|index| added.item(index))
                    .filter_map(|node| element_id(&node))
                    .collect(),
            }
        })
        .collect();
    MutationBatch::new(records)
}

fn element_id(node: &Node) -> Option<String> {
    as_element(node)
        .map(|element| element.id())
        .filter(|id| !id.is_empty())
}
