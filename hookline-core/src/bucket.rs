//! # Hook Buckets
//!
//! A [`HookBucket`] owns every callback registered under one hook name,
//! grouped by priority. Lower priorities run first; callbacks sharing a
//! priority run in registration order.
//!
//! Priority groups are kept in insertion order and only sorted when a pass is
//! about to run. Removal without an explicit priority therefore searches the
//! groups in their current stored order, which is not necessarily ascending.
//!
//! Passes never run directly over the bucket. [`HookBucket::snapshot`] sorts
//! and copies the ordered callbacks into a [`CallbackQueue`], so a callback may
//! freely add or remove callbacks on the same hook while the pass continues.

use crate::{
    callback::{Callback, HookFn},
    error::{BoxError, HookError},
    value::Value,
};
use indexmap::IndexMap;

/// All callbacks registered for a single hook name.
#[derive(Debug, Clone)]
pub struct HookBucket {
    name: String,
    callbacks: IndexMap<i32, Vec<Callback>>,
    sorted: bool,
}

impl HookBucket {
    /// Create an empty bucket for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            callbacks: IndexMap::new(),
            sorted: true,
        }
    }

    /// The hook name this bucket was created for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a callback at `priority`.
    ///
    /// No uniqueness check is made; adding the same handle twice runs it twice.
    pub fn add(&mut self, func: HookFn, priority: i32, accepted_args: usize) {
        self.callbacks
            .entry(priority)
            .or_default()
            .push(Callback::new(func, accepted_args));
        self.sorted = false;
    }

    /// Remove the first entry whose callable is `func`.
    ///
    /// With a priority only that group is searched. Without one, groups are
    /// searched in stored order and the search stops at the first match.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, func: &HookFn, priority: Option<i32>) -> bool {
        let position =
            |callbacks: &Vec<Callback>| callbacks.iter().position(|cb| cb.func() == func);

        let found = match priority {
            Some(priority) => self
                .callbacks
                .get(&priority)
                .and_then(position)
                .map(|index| (priority, index)),
            None => self.callbacks.iter().find_map(|(priority, callbacks)| {
                position(callbacks).map(|index| (*priority, index))
            }),
        };

        let Some((priority, index)) = found else {
            return false;
        };

        if let Some(callbacks) = self.callbacks.get_mut(&priority) {
            callbacks.remove(index);
            if callbacks.is_empty() {
                self.callbacks.shift_remove(&priority);
            }
        }
        true
    }

    /// Remove every callback at `priority`, or every callback at all.
    pub fn remove_all(&mut self, priority: Option<i32>) {
        match priority {
            Some(priority) => {
                self.callbacks.shift_remove(&priority);
            }
            None => {
                self.callbacks.clear();
                self.sorted = true;
            }
        }
    }

    /// Check for callbacks.
    ///
    /// Without `func`, reports whether any callback exists. With it, reports
    /// whether that exact handle is registered at any priority.
    pub fn has(&self, func: Option<&HookFn>) -> bool {
        if self.callbacks.is_empty() {
            return false;
        }
        match func {
            None => true,
            Some(func) => self
                .callbacks
                .values()
                .flatten()
                .any(|cb| cb.func() == func),
        }
    }

    /// Total number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.values().map(Vec::len).sum()
    }

    /// Check whether the bucket has no callbacks.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Priorities that currently hold callbacks, in stored order.
    pub fn priorities(&self) -> impl Iterator<Item = i32> + '_ {
        self.callbacks.keys().copied()
    }

    fn sort(&mut self) {
        if !self.sorted {
            self.callbacks.sort_keys();
            self.sorted = true;
        }
    }

    /// Sort, then copy the callbacks out in execution order.
    pub fn snapshot(&mut self) -> CallbackQueue {
        self.sort();
        CallbackQueue {
            hook: self.name.clone(),
            callbacks: self.callbacks.values().flatten().cloned().collect(),
        }
    }

    /// Run every callback for side effect.
    pub fn exec(&mut self, args: &[Value]) -> Result<(), HookError> {
        if self.is_empty() {
            return Ok(());
        }
        self.snapshot().exec(args)
    }

    /// Thread `value` through every callback and return the result.
    pub fn apply(&mut self, value: Value, extra: &[Value]) -> Result<Value, HookError> {
        if self.is_empty() {
            return Ok(value);
        }
        self.snapshot().apply(value, extra)
    }
}

/// An ordered, owned copy of a bucket's callbacks, ready to run.
#[derive(Debug, Clone)]
pub struct CallbackQueue {
    hook: String,
    callbacks: Vec<Callback>,
}

impl CallbackQueue {
    /// Name of the hook the queue was taken from.
    pub fn hook(&self) -> &str {
        &self.hook
    }

    /// Number of callbacks in the queue.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Iterate over the callbacks in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Callback> {
        self.callbacks.iter()
    }

    /// Invoke each callback with at most `accepted_args` leading arguments.
    ///
    /// Return values are discarded. The first failure stops the pass.
    pub fn exec(&self, args: &[Value]) -> Result<(), HookError> {
        for callback in &self.callbacks {
            callback.invoke(args).map_err(|source| self.failed(source))?;
        }
        Ok(())
    }

    /// Invoke each callback with `[running, extra...]`, replacing the running
    /// value with every return value, including `Null`.
    pub fn apply(&self, value: Value, extra: &[Value]) -> Result<Value, HookError> {
        // Slot 0 carries the running value.
        let mut call_args = Vec::with_capacity(extra.len() + 1);
        call_args.push(value);
        call_args.extend_from_slice(extra);

        for callback in &self.callbacks {
            call_args[0] = callback
                .invoke(&call_args)
                .map_err(|source| self.failed(source))?;
        }
        Ok(call_args.swap_remove(0))
    }

    fn failed(&self, source: BoxError) -> HookError {
        HookError::Callback {
            hook: self.hook.clone(),
            source,
        }
    }
}

impl<'a> IntoIterator for &'a CallbackQueue {
    type Item = &'a Callback;
    type IntoIter = std::slice::Iter<'a, Callback>;

    fn into_iter(self) -> Self::IntoIter {
        self.callbacks.iter()
    }
}
