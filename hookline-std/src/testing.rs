//! Testing utilities for Hookline.
//!
//! This module provides ready-made callbacks that make assertions about hook
//! execution easier.
//!
//! # Features
//!
//! - [`CallRecorder`]: records the arguments of every invocation
//! - [`OrderLog`]: a shared log of labelled invocations, for ordering checks
//! - [`append`]: a filter that appends a suffix to the running value
//! - [`failing`]: a callback that always fails

use hookline_core::{BoxError, HookFn, Value};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Call Recorder
// ============================================================================

/// Records the arguments of every invocation of the callbacks it hands out.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = CallRecorder::new();
/// hooks.add_action("save", recorder.callback(), 10, 2);
/// hooks.do_action("save", &args![1, 2, 3])?;
///
/// assert_eq!(recorder.calls(), vec![vec![Value::from(1), Value::from(2)]]);
/// ```
#[derive(Clone, Default)]
pub struct CallRecorder {
    calls: Rc<RefCell<Vec<Vec<Value>>>>,
}

impl CallRecorder {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that records its arguments and returns `Null`.
    pub fn callback(&self) -> HookFn {
        let calls = self.calls.clone();
        HookFn::new(move |args| calls.borrow_mut().push(args.to_vec()))
    }

    /// A callback that records its arguments and returns the first one, or
    /// `Null` when it received none.
    pub fn passthrough(&self) -> HookFn {
        let calls = self.calls.clone();
        HookFn::new(move |args| {
            calls.borrow_mut().push(args.to_vec());
            args.first().cloned().unwrap_or_default()
        })
    }

    /// Get a clone of the recorded argument lists.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.borrow().clone()
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

// ============================================================================
// Order Log
// ============================================================================

/// A shared log of labels, appended to as callbacks run.
#[derive(Clone, Default)]
pub struct OrderLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl OrderLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends `label` to the log each time it runs.
    pub fn action(&self, label: impl Into<String>) -> HookFn {
        let log = self.clone();
        let label = label.into();
        HookFn::new(move |_| log.push(label.clone()))
    }

    /// Append a label directly.
    pub fn push(&self, label: impl Into<String>) {
        self.entries.borrow_mut().push(label.into());
    }

    /// Get a clone of the logged labels.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

// ============================================================================
// Canned callbacks
// ============================================================================

/// A filter that appends `suffix` to the display form of the running value.
pub fn append(suffix: impl Into<String>) -> HookFn {
    let suffix = suffix.into();
    HookFn::new(move |args| {
        let current = args.first().map(ToString::to_string).unwrap_or_default();
        current + &suffix
    })
}

/// A callback that always fails with `message`.
pub fn failing(message: &'static str) -> HookFn {
    HookFn::new(move |_| -> Result<(), BoxError> { Err(message.into()) })
}
