//! In-memory port doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use themeswitch_domain::error::{DomError, ElementNotFoundError, ThemeSwitchError};
use themeswitch_domain::shortcut::KeyPress;
use themeswitch_domain::theme::Theme;

use crate::ports::{ElementLookup, ThemeAttribute, ToggleControl, UiEventSource};

/// Switch whose state stays observable after the toggler takes ownership.
#[derive(Clone, Default)]
pub struct FakeControl {
    checked: Rc<Cell<bool>>,
}

impl FakeControl {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Rc::new(Cell::new(checked)),
        }
    }
}

impl ToggleControl for FakeControl {
    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked.set(checked);
    }
}

#[derive(Clone, Default)]
pub struct FakeAttribute {
    value: Rc<Cell<Option<Theme>>>,
    writes: Rc<Cell<usize>>,
}

impl FakeAttribute {
    pub fn value(&self) -> Option<Theme> {
        self.value.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeAttribute for FakeAttribute {
    fn write(&mut self, theme: Theme) -> Result<(), ThemeSwitchError> {
        self.value.set(Some(theme));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

pub struct FailingAttribute;

impl ThemeAttribute for FailingAttribute {
    fn write(&mut self, _theme: Theme) -> Result<(), ThemeSwitchError> {
        Err(DomError {
            operation: "set_dataset",
            reason: "rejected".to_string(),
        }
        .into())
    }
}

/// Page with a fixed set of switches, each handed out as a shared handle.
#[derive(Default)]
pub struct FakeLookup {
    controls: HashMap<String, FakeControl>,
}

impl FakeLookup {
    pub fn with_control(id: &str, checked: bool) -> Self {
        let mut controls = HashMap::new();
        controls.insert(id.to_string(), FakeControl::new(checked));
        Self { controls }
    }

    pub fn control(&self, id: &str) -> FakeControl {
        self.controls[id].clone()
    }
}

impl ElementLookup for FakeLookup {
    type Control = FakeControl;

    fn toggle_control(&self, id: &str) -> Result<FakeControl, ThemeSwitchError> {
        self.controls
            .get(id)
            .cloned()
            .ok_or_else(|| ElementNotFoundError::new(id).into())
    }
}

type ClickHandler = (String, Box<dyn FnMut()>);

/// Event source that records callbacks and replays input on demand.
#[derive(Default)]
pub struct FakeEventSource {
    targets: HashSet<String>,
    clicks: RefCell<Vec<ClickHandler>>,
    keys: RefCell<Vec<Box<dyn FnMut(KeyPress)>>>,
}

impl FakeEventSource {
    pub fn with_target(id: &str) -> Self {
        Self {
            targets: HashSet::from([id.to_string()]),
            ..Self::default()
        }
    }

    pub fn click(&self, id: &str) {
        for (target, handler) in self.clicks.borrow_mut().iter_mut() {
            if target == id {
                handler();
            }
        }
    }

    pub fn keydown(&self, press: &KeyPress) {
        for handler in self.keys.borrow_mut().iter_mut() {
            handler(press.clone());
        }
    }

    pub fn registered(&self) -> (usize, usize) {
        (self.clicks.borrow().len(), self.keys.borrow().len())
    }
}

impl UiEventSource for FakeEventSource {
    fn on_click(
        &self,
        target_id: &str,
        handler: Box<dyn FnMut()>,
    ) -> Result<(), ThemeSwitchError> {
        if !self.targets.contains(target_id) {
            return Err(ElementNotFoundError::new(target_id).into());
        }
        self.clicks
            .borrow_mut()
            .push((target_id.to_string(), handler));
        Ok(())
    }

    fn on_keydown(&self, handler: Box<dyn FnMut(KeyPress)>) -> Result<(), ThemeSwitchError> {
        self.keys.borrow_mut().push(handler);
        Ok(())
    }
}
