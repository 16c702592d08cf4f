//! The shared default registry and free functions operating on it.
//!
//! The registry is single-threaded, so "shared" means shared by everything on
//! the current thread. Tests that need isolation should construct their own
//! [`Registry`] instead.

use hookline_core::{HookError, HookFn, Value};
use hookline_std::Registry;

thread_local! {
    static DEFAULT: Registry = default_instance();
}

fn default_instance() -> Registry {
    let registry = Registry::new();
    #[cfg(feature = "inventory")]
    {
        let installed = registry.install_static_registrations();
        tracing::debug!(installed, "initialized default registry");
    }
    registry
}

/// A handle to the shared default registry of the current thread.
pub fn default_registry() -> Registry {
    DEFAULT.with(Registry::clone)
}

/// [`Registry::add`] on the default registry.
pub fn add(hook: &str, func: impl Into<Value>, priority: i32, accepted_args: usize) {
    default_registry().add(hook, func, priority, accepted_args);
}

/// [`Registry::add_action`] on the default registry.
pub fn add_action(hook: &str, func: impl Into<Value>, priority: i32, accepted_args: usize) {
    default_registry().add_action(hook, func, priority, accepted_args);
}

/// [`Registry::add_filter`] on the default registry.
pub fn add_filter(hook: &str, func: impl Into<Value>, priority: i32, accepted_args: usize) {
    default_registry().add_filter(hook, func, priority, accepted_args);
}

/// [`Registry::remove`] on the default registry.
pub fn remove(hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
    default_registry().remove(hook, func, priority)
}

/// [`Registry::remove_action`] on the default registry.
pub fn remove_action(hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
    default_registry().remove_action(hook, func, priority)
}

/// [`Registry::remove_filter`] on the default registry.
pub fn remove_filter(hook: &str, func: &HookFn, priority: Option<i32>) -> bool {
    default_registry().remove_filter(hook, func, priority)
}

/// [`Registry::remove_all`] on the default registry.
pub fn remove_all(hook: &str, priority: Option<i32>) {
    default_registry().remove_all(hook, priority);
}

/// [`Registry::remove_all_actions`] on the default registry.
pub fn remove_all_actions(hook: &str, priority: Option<i32>) {
    default_registry().remove_all_actions(hook, priority);
}

/// [`Registry::remove_all_filters`] on the default registry.
pub fn remove_all_filters(hook: &str, priority: Option<i32>) {
    default_registry().remove_all_filters(hook, priority);
}

/// [`Registry::has`] on the default registry.
pub fn has(hook: &str, func: Option<&HookFn>) -> bool {
    default_registry().has(hook, func)
}

/// [`Registry::has_action`] on the default registry.
pub fn has_action(hook: &str, func: Option<&HookFn>) -> bool {
    default_registry().has_action(hook, func)
}

/// [`Registry::has_filter`] on the default registry.
pub fn has_filter(hook: &str, func: Option<&HookFn>) -> bool {
    default_registry().has_filter(hook, func)
}

/// [`Registry::do_action`] on the default registry.
pub fn do_action(hook: &str, args: &[Value]) -> Result<(), HookError> {
    default_registry().do_action(hook, args)
}

/// [`Registry::exec`] on the default registry.
pub fn exec(hook: &str, args: &[Value]) -> Result<(), HookError> {
    default_registry().exec(hook, args)
}

/// [`Registry::do_action_ref_array`] on the default registry.
pub fn do_action_ref_array(hook: &str, args: &[Value]) -> Result<(), HookError> {
    default_registry().do_action_ref_array(hook, args)
}

/// [`Registry::apply_filters`] on the default registry.
pub fn apply_filters(
    hook: &str,
    value: impl Into<Value>,
    extra: &[Value],
) -> Result<Value, HookError> {
    default_registry().apply_filters(hook, value, extra)
}

/// [`Registry::apply`] on the default registry.
pub fn apply(hook: &str, value: impl Into<Value>, extra: &[Value]) -> Result<Value, HookError> {
    default_registry().apply(hook, value, extra)
}

/// [`Registry::filter`] on the default registry.
pub fn filter(hook: &str, value: impl Into<Value>, extra: &[Value]) -> Result<Value, HookError> {
    default_registry().filter(hook, value, extra)
}

/// [`Registry::apply_filters_ref_array`] on the default registry.
pub fn apply_filters_ref_array(hook: &str, args: &[Value]) -> Result<Value, HookError> {
    default_registry().apply_filters_ref_array(hook, args)
}

/// [`Registry::did_action`] on the default registry.
pub fn did_action(hook: &str) -> usize {
    default_registry().did_action(hook)
}

/// [`Registry::current_action`] on the default registry.
pub fn current_action() -> Option<String> {
    default_registry().current_action()
}

/// [`Registry::current_filter`] on the default registry.
pub fn current_filter() -> Option<String> {
    default_registry().current_filter()
}

/// [`Registry::doing_action`] on the default registry.
pub fn doing_action(hook: Option<&str>) -> bool {
    default_registry().doing_action(hook)
}

/// [`Registry::doing_filter`] on the default registry.
pub fn doing_filter(hook: Option<&str>) -> bool {
    default_registry().doing_filter(hook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_shared_per_thread() {
        let a = default_registry();
        let b = default_registry();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Registry::new()));

        let other_thread = std::thread::spawn(|| {
            add_action("global_unit_thread_probe", HookFn::new(|_| ()), 10, 1);
            has_action("global_unit_thread_probe", None)
        })
        .join()
        .unwrap();
        assert!(other_thread);
        assert!(!has_action("global_unit_thread_probe", None));
    }

    #[test]
    fn free_functions_reach_default_registry() {
        let hook = "global_unit_filter";
        let func = HookFn::new(|args| format!("[{}]", args[0]));
        add_filter(hook, func.clone(), 10, 1);

        assert!(has_filter(hook, Some(&func)));
        assert_eq!(apply_filters(hook, "x", &[]).unwrap(), Value::from("[x]"));
        assert!(default_registry().has(hook, Some(&func)));

        assert!(remove_filter(hook, &func, None));
        assert_eq!(filter(hook, "x", &[]).unwrap(), Value::from("x"));
    }
}
