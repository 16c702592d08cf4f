#![allow(dead_code)]

use hookline::{HookFn, Registry, Value, WeakRegistry};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Fixtures
// ============================================================================

/// A shared string that callbacks write into.
#[derive(Clone, Default)]
pub struct Slot(Rc<RefCell<String>>);

impl Slot {
    pub fn set(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }
}

/// A flag that callbacks flip.
#[derive(Clone, Default)]
pub struct Flag(Rc<RefCell<bool>>);

impl Flag {
    pub fn callback(&self) -> HookFn {
        let flag = self.clone();
        HookFn::new(move |_| *flag.0.borrow_mut() = true)
    }

    pub fn is_set(&self) -> bool {
        *self.0.borrow()
    }
}

/// Snapshot of the registry's introspection state, taken from inside a callback.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub current_action: Option<String>,
    pub current_filter: Option<String>,
    pub doing_any_action: bool,
    pub doing_any_filter: bool,
}

pub fn observe(hooks: &Registry) -> Observation {
    Observation {
        current_action: hooks.current_action(),
        current_filter: hooks.current_filter(),
        doing_any_action: hooks.doing_action(None),
        doing_any_filter: hooks.doing_filter(None),
    }
}

/// A callback that pushes an [`Observation`] of `hooks` into `log` when run.
pub fn observer(hooks: WeakRegistry, log: Rc<RefCell<Vec<Observation>>>) -> HookFn {
    HookFn::new(move |args| {
        if let Some(hooks) = hooks.upgrade() {
            log.borrow_mut().push(observe(&hooks));
        }
        args.first().cloned().unwrap_or_default()
    })
}

pub fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}
