//! Action/filter naming of the registry operations.
//!
//! Every method here forwards to one of the operations in the parent module.
//! Actions and filters share storage, so `add_action` and `add_filter` (and
//! every other pair) are interchangeable.

use super::{Registration, Registry};
use hookline_core::{HookError, HookFn, Value};

impl Registry {
    /// Attach `func` to `hook` at `priority`, forwarding up to
    /// `accepted_args` arguments. See [`Registry::register`].
    pub fn add(&self, hook: &str, func: impl Into<Value>, priority: i32, accepted_args: usize) {
        self.register(
            hook,
            func,
            Registration::new()
                .with_priority(priority)
                .with_accepted_args(accepted_args),
        );
    }

    /// Alias of [`Registry::add`].
    pub fn add_action(
        &self,
        hook: &str,
        func: impl Into<Value>,
        priority: i32,
        accepted_args: usize,
    ) {
        self.add(hook, func, priority, accepted_args);
    }

    /// Alias of [`Registry::add`].
    pub fn add_filter(
        &self,
        hook: &str,
        func: impl Into<Value>,
        priority: i32,
        accepted_args: usize,
    ) {
        self.add(hook, func, priority, accepted_args);
    }

    /// Alias of [`Registry::unregister`].
    pub fn remove(&self, hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
        self.unregister(hook, func, priority)
    }

    /// Alias of [`Registry::unregister`].
    pub fn remove_action(&self, hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
        self.unregister(hook, func, priority)
    }

    /// Alias of [`Registry::unregister`].
    pub fn remove_filter(&self, hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
        self.unregister(hook, func, priority)
    }

    /// Alias of [`Registry::unregister_all`].
    pub fn remove_all(&self, hook: &str, priority: Option<i32>) {
        self.unregister_all(hook, priority);
    }

    /// Alias of [`Registry::unregister_all`].
    pub fn remove_all_actions(&self, hook: &str, priority: Option<i32>) {
        self.unregister_all(hook, priority);
    }

    /// Alias of [`Registry::unregister_all`].
    pub fn remove_all_filters(&self, hook: &str, priority: Option<i32>) {
        self.unregister_all(hook, priority);
    }

    /// Alias of [`Registry::is_registered`].
    pub fn has(&self, hook: &str, func: Option<&HookFn>) -> bool {
        self.is_registered(hook, func)
    }

    /// Alias of [`Registry::is_registered`].
    pub fn has_action(&self, hook: &str, func: Option<&HookFn>) -> bool {
        self.is_registered(hook, func)
    }

    /// Alias of [`Registry::is_registered`].
    pub fn has_filter(&self, hook: &str, func: Option<&HookFn>) -> bool {
        self.is_registered(hook, func)
    }

    /// Alias of [`Registry::fire`].
    pub fn do_action(&self, hook: &str, args: &[Value]) -> Result<(), HookError> {
        self.fire(hook, args)
    }

    /// Legacy alias of [`Registry::fire`].
    pub fn exec(&self, hook: &str, args: &[Value]) -> Result<(), HookError> {
        self.fire(hook, args)
    }

    /// Alias of [`Registry::fire_with_arg_list`].
    pub fn do_action_ref_array(&self, hook: &str, args: &[Value]) -> Result<(), HookError> {
        self.fire_with_arg_list(hook, args)
    }

    /// Alias of [`Registry::filter`].
    pub fn apply_filters(
        &self,
        hook: &str,
        value: impl Into<Value>,
        extra: &[Value],
    ) -> Result<Value, HookError> {
        self.filter(hook, value, extra)
    }

    /// Legacy alias of [`Registry::filter`].
    pub fn apply(
        &self,
        hook: &str,
        value: impl Into<Value>,
        extra: &[Value],
    ) -> Result<Value, HookError> {
        self.filter(hook, value, extra)
    }

    /// Alias of [`Registry::filter_with_arg_list`].
    pub fn apply_filters_ref_array(&self, hook: &str, args: &[Value]) -> Result<Value, HookError> {
        self.filter_with_arg_list(hook, args)
    }

    /// Alias of [`Registry::fire_count`].
    pub fn did_action(&self, hook: &str) -> usize {
        self.fire_count(hook)
    }

    /// Alias of [`Registry::is_running_action`].
    pub fn doing_action(&self, hook: Option<&str>) -> bool {
        self.is_running_action(hook)
    }

    /// Alias of [`Registry::is_running_filter`].
    pub fn doing_filter(&self, hook: Option<&str>) -> bool {
        self.is_running_filter(hook)
    }
}
