//! Browser side of the select: listener attachment, measurement, hit tests.

use super::anchor::TriggerBounds;
use super::listeners::{ListenerHost, OverlayEvent};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, Node};

/// Attaches overlay listeners to `window` / `document`
pub struct DomListenerHost {
    on_reposition: Rc<dyn Fn()>,
    on_pointer_down: Rc<dyn Fn(Event)>,
}

impl DomListenerHost {
    pub fn new(on_reposition: impl Fn() + 'static, on_pointer_down: impl Fn(Event) + 'static) -> Self {
        Self {
            on_reposition: Rc::new(on_reposition),
            on_pointer_down: Rc::new(on_pointer_down),
        }
    }

    fn target_for(event: OverlayEvent) -> Option<EventTarget> {
        let window = web_sys::window()?;
        match event {
            OverlayEvent::Scroll | OverlayEvent::Resize => Some(window.into()),
            OverlayEvent::PointerDown => window.document().map(Into::into),
        }
    }
}

/// A live listener; removed from its target on drop
pub struct DomSubscription {
    target: EventTarget,
    event: OverlayEvent,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event.dom_name(),
            self.closure.as_ref().unchecked_ref(),
            self.event.capture(),
        );
    }
}

impl ListenerHost for DomListenerHost {
    type Subscription = DomSubscription;

    fn subscribe(&self, event: OverlayEvent) -> Option<DomSubscription> {
        let target = Self::target_for(event)?;
        let closure = match event {
            OverlayEvent::Scroll | OverlayEvent::Resize => {
                let handler = self.on_reposition.clone();
                Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>)
            }
            OverlayEvent::PointerDown => {
                let handler = self.on_pointer_down.clone();
                Closure::wrap(Box::new(move |ev: Event| handler(ev)) as Box<dyn FnMut(Event)>)
            }
        };
        if let Err(err) = target.add_event_listener_with_callback_and_bool(
            event.dom_name(),
            closure.as_ref().unchecked_ref(),
            event.capture(),
        ) {
            log::warn!("select: addEventListener('{}') failed: {:?}", event.dom_name(), err);
            return None;
        }
        Some(DomSubscription {
            target,
            event,
            closure,
        })
    }
}

/// Viewport rectangle of a mounted element; `None` once detached
pub fn measure_trigger(element: &Element) -> Option<TriggerBounds> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(TriggerBounds {
        top: rect.top(),
        left: rect.left(),
        bottom: rect.bottom(),
        width: rect.width(),
    })
}

/// Node the event was dispatched to
pub fn event_target_node(event: &Event) -> Option<Node> {
    event.target().and_then(|t| t.dyn_into::<Node>().ok())
}

/// Whether `target` is `container` or one of its descendants
pub fn subtree_contains(container: Option<&Element>, target: Option<&Node>) -> bool {
    match (container, target) {
        (Some(container), Some(target)) => container.contains(Some(target)),
        _ => false,
    }
}
