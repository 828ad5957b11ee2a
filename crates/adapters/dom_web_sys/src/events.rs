//! DOM event source: click and keydown listeners backed by `Closure`s.

use std::cell::RefCell;

use themeswitch_app::ports::UiEventSource;
use themeswitch_domain::error::{ElementNotFoundError, ThemeSwitchError};
use themeswitch_domain::shortcut::KeyPress;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, KeyboardEvent};

use crate::dom_error;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Registers listeners on the document and keeps their closures alive.
///
/// Dropping the source removes every listener it registered.
pub struct DomEventSource {
    document: Document,
    listeners: RefCell<Vec<Listener>>,
}

impl DomEventSource {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn listen(
        &self,
        target: EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<(), ThemeSwitchError> {
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|err| dom_error("add_event_listener", &err))?;
        self.listeners.borrow_mut().push(Listener {
            target,
            kind,
            closure,
        });
        Ok(())
    }
}

impl UiEventSource for DomEventSource {
    fn on_click(
        &self,
        target_id: &str,
        mut handler: Box<dyn FnMut()>,
    ) -> Result<(), ThemeSwitchError> {
        let target = self
            .document
            .get_element_by_id(target_id)
            .ok_or_else(|| ElementNotFoundError::new(target_id))?;
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
        self.listen(target.into(), "click", closure)
    }

    fn on_keydown(&self, mut handler: Box<dyn FnMut(KeyPress)>) -> Result<(), ThemeSwitchError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                handler(KeyPress::new(key.key(), key.shift_key()));
            }
        });
        self.listen(self.document.clone().into(), "keydown", closure)
    }
}

impl Drop for DomEventSource {
    fn drop(&mut self) {
        for listener in self.listeners.get_mut().drain(..) {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            ) {
                tracing::warn!(kind = listener.kind, ?err, "failed to remove listener");
            }
        }
    }
}
