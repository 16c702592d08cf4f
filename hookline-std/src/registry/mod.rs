//! Registry of named hooks.
//!
//! The [`Registry`] owns one [`HookBucket`] per hook name and keeps the
//! bookkeeping that spans hooks: how often each action fired, and which
//! actions and filters are running right now.
//!
//! # Reentrancy
//!
//! Callbacks may call back into the registry that is running them: fire or
//! filter other hooks (or the same one), register, or remove callbacks. Each
//! pass runs over a snapshot of the hook taken before its first callback, so
//! changes made during a pass take effect from the next pass on.
//!
//! # Example
//!
//! ```rust,ignore
//! let hooks = Registry::new();
//! hooks.add_filter("title", HookFn::new(|args| format!("<{}>", args[0])), 10, 1);
//! assert_eq!(hooks.apply_filters("title", "home", &[])?, Value::from("<home>"));
//! ```

mod aliases;
mod builder;
mod stack;
#[cfg(feature = "inventory")]
mod statics;

pub use builder::RegistryBuilder;
#[cfg(feature = "inventory")]
pub use statics::{StaticRegistration, static_registrations};

use hookline_core::{CallbackQueue, HookBucket, HookError, HookFn, UsageError, Value};
use stack::ActiveStack;
use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::{Rc, Weak},
};

/// Priority used when none is given. Lower runs earlier.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Number of call-time arguments forwarded when none is given.
pub const DEFAULT_ACCEPTED_ARGS: usize = 1;

/// Per-callback registration settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Priority (lower = executed first). Default is [`DEFAULT_PRIORITY`].
    pub priority: i32,
    /// Cap on forwarded arguments. Default is [`DEFAULT_ACCEPTED_ARGS`].
    pub accepted_args: usize,
}

impl Default for Registration {
    fn default() -> Self {
        Self::new()
    }
}

impl Registration {
    /// Default settings.
    pub const fn new() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            accepted_args: DEFAULT_ACCEPTED_ARGS,
        }
    }

    /// Set priority.
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the argument cap.
    pub const fn with_accepted_args(mut self, accepted_args: usize) -> Self {
        self.accepted_args = accepted_args;
        self
    }
}

#[derive(Default)]
struct Inner {
    buckets: RefCell<HashMap<String, HookBucket>>,
    fire_counts: RefCell<HashMap<String, usize>>,
    actions: ActiveStack,
    filters: ActiveStack,
}

/// A registry of actions and filters.
///
/// `Registry` is a handle: clones share the same hooks and bookkeeping, while
/// every [`Registry::new`] starts a fully isolated instance. It is meant for
/// single-threaded use and is neither `Send` nor `Sync`.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Rc<Inner>,
}

impl Registry {
    /// Create an empty, isolated registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Create a non-owning handle, for callbacks that need to reach back into
    /// the registry that stores them.
    pub fn downgrade(&self) -> WeakRegistry {
        WeakRegistry {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Check whether two handles refer to the same registry.
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Attach `func` to `hook`.
    ///
    /// `func` must be a [`Value::Func`]. Anything else is reported as a
    /// [`UsageError`] diagnostic and nothing is registered.
    pub fn register(&self, hook: &str, func: impl Into<Value>, registration: Registration) {
        let func = match func.into() {
            Value::Func(func) => func,
            other => {
                let err = UsageError::NotCallable {
                    hook: hook.to_owned(),
                    found: other.kind(),
                };
                tracing::error!(hook, error = %err, "rejected hook registration");
                return;
            }
        };

        tracing::debug!(
            hook,
            priority = registration.priority,
            accepted_args = registration.accepted_args,
            "registering callback"
        );
        self.inner
            .buckets
            .borrow_mut()
            .entry(hook.to_owned())
            .or_insert_with(|| HookBucket::new(hook))
            .add(func, registration.priority, registration.accepted_args);
    }

    /// Detach the first registration of `func`, optionally only at `priority`.
    ///
    /// Returns `false` when nothing matched, including for unknown hooks.
    pub fn unregister(&self, hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
        let removed = self
            .inner
            .buckets
            .borrow_mut()
            .get_mut(hook)
            .is_some_and(|bucket| bucket.remove(func, priority));
        if removed {
            tracing::debug!(hook, ?priority, "removed callback");
        }
        removed
    }

    /// Detach every callback of `hook`, or only those at `priority`.
    pub fn unregister_all(&self, hook: &str, priority: Option<i32>) {
        if let Some(bucket) = self.inner.buckets.borrow_mut().get_mut(hook) {
            bucket.remove_all(priority);
            tracing::debug!(hook, ?priority, "removed all callbacks");
        }
    }

    /// Check for callbacks on `hook`; with `func`, for that exact handle.
    pub fn is_registered(&self, hook: &str, func: Option<&HookFn>) -> bool {
        self.inner
            .buckets
            .borrow()
            .get(hook)
            .is_some_and(|bucket| bucket.has(func))
    }

    /// Run the callbacks of `hook` for side effect.
    ///
    /// Does nothing for a hook that never had a registration. Otherwise the
    /// fire count is bumped, even when the hook has no callbacks left, and the
    /// name is reported by [`Registry::current_action`] until the pass ends.
    /// A failing callback stops the pass and its error is returned.
    pub fn fire(&self, hook: &str, args: &[Value]) -> Result<(), HookError> {
        let Some(queue) = self.snapshot(hook) else {
            return Ok(());
        };
        *self
            .inner
            .fire_counts
            .borrow_mut()
            .entry(hook.to_owned())
            .or_default() += 1;

        let _span = tracing::trace_span!("action", hook, callbacks = queue.len()).entered();
        let _active = self.inner.actions.enter(hook);
        queue
            .exec(args)
            .inspect_err(|err| tracing::debug!(hook, error = %err, "action aborted"))
    }

    /// [`Registry::fire`] with the arguments given as one sequence.
    pub fn fire_with_arg_list(&self, hook: &str, args: &[Value]) -> Result<(), HookError> {
        self.fire(hook, args)
    }

    /// Thread `value` through the callbacks of `hook`.
    ///
    /// Every callback receives `[running, extra...]` cut to its argument cap
    /// and its return value becomes the running value. A hook that never had
    /// a registration returns `value` untouched.
    pub fn filter(
        &self,
        hook: &str,
        value: impl Into<Value>,
        extra: &[Value],
    ) -> Result<Value, HookError> {
        let value = value.into();
        let Some(queue) = self.snapshot(hook) else {
            return Ok(value);
        };

        let _span = tracing::trace_span!("filter", hook, callbacks = queue.len()).entered();
        let _active = self.inner.filters.enter(hook);
        queue
            .apply(value, extra)
            .inspect_err(|err| tracing::debug!(hook, error = %err, "filter aborted"))
    }

    /// [`Registry::filter`] with the initial value as the first element of
    /// `args`. An empty sequence filters [`Value::Null`].
    pub fn filter_with_arg_list(&self, hook: &str, args: &[Value]) -> Result<Value, HookError> {
        match args.split_first() {
            Some((value, extra)) => self.filter(hook, value.clone(), extra),
            None => self.filter(hook, Value::Null, &[]),
        }
    }

    /// How many times `hook` has been fired as an action.
    pub fn fire_count(&self, hook: &str) -> usize {
        self.inner
            .fire_counts
            .borrow()
            .get(hook)
            .copied()
            .unwrap_or(0)
    }

    /// The innermost action currently running.
    pub fn current_action(&self) -> Option<String> {
        self.inner.actions.current()
    }

    /// The innermost filter currently running.
    pub fn current_filter(&self) -> Option<String> {
        self.inner.filters.current()
    }

    /// Whether `hook` is running as an action at any nesting depth, or
    /// without a name, whether any action is running.
    pub fn is_running_action(&self, hook: Option<&str>) -> bool {
        self.inner.actions.contains(hook)
    }

    /// Whether `hook` is running as a filter at any nesting depth, or
    /// without a name, whether any filter is running.
    pub fn is_running_filter(&self, hook: Option<&str>) -> bool {
        self.inner.filters.contains(hook)
    }

    /// Number of actions currently on the stack.
    pub fn action_depth(&self) -> usize {
        self.inner.actions.depth()
    }

    /// Number of filters currently on the stack.
    pub fn filter_depth(&self) -> usize {
        self.inner.filters.depth()
    }

    /// Names of every hook that has ever had a registration, sorted.
    pub fn hook_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.buckets.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of callbacks currently attached to `hook`.
    pub fn callback_count(&self, hook: &str) -> usize {
        self.inner
            .buckets
            .borrow()
            .get(hook)
            .map_or(0, HookBucket::len)
    }

    fn snapshot(&self, hook: &str) -> Option<CallbackQueue> {
        self.inner
            .buckets
            .borrow_mut()
            .get_mut(hook)
            .map(HookBucket::snapshot)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("hooks", &self.hook_names())
            .field("current_action", &self.current_action())
            .field("current_filter", &self.current_filter())
            .finish()
    }
}

/// A non-owning [`Registry`] handle.
///
/// Store this inside callbacks instead of a `Registry` clone so the registry
/// and its callbacks do not keep each other alive.
#[derive(Clone, Default)]
pub struct WeakRegistry {
    inner: Weak<Inner>,
}

impl WeakRegistry {
    /// Get the registry back, if it is still alive.
    pub fn upgrade(&self) -> Option<Registry> {
        self.inner.upgrade().map(|inner| Registry { inner })
    }
}

impl fmt::Debug for WeakRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRegistry")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
