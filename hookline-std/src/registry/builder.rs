//! Builder for registries that start out with callbacks attached.

use super::{Registration, Registry};
use hookline_core::Value;

/// Builder for constructing a [`Registry`].
///
/// Registrations are applied in the order they were added when
/// [`RegistryBuilder::build`] is called, so callbacks sharing a priority keep
/// that order at run time.
///
/// # Example
/// ```rust,ignore
/// let hooks = RegistryBuilder::new()
///     .action("init", boot)
///     .register("init", early_boot, Registration::new().with_priority(1))
///     .build();
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<(String, Value, Registration)>,
    #[cfg(feature = "inventory")]
    statics: bool,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a registration with explicit settings.
    pub fn register(
        mut self,
        hook: impl Into<String>,
        func: impl Into<Value>,
        registration: Registration,
    ) -> Self {
        self.register_mut(hook, func, registration);
        self
    }

    /// Queue a registration with explicit settings (mutable version).
    pub fn register_mut(
        &mut self,
        hook: impl Into<String>,
        func: impl Into<Value>,
        registration: Registration,
    ) {
        self.entries.push((hook.into(), func.into(), registration));
    }

    /// Queue an action with default settings.
    pub fn action(self, hook: impl Into<String>, func: impl Into<Value>) -> Self {
        self.register(hook, func, Registration::new())
    }

    /// Queue a filter with default settings.
    pub fn filter(self, hook: impl Into<String>, func: impl Into<Value>) -> Self {
        self.register(hook, func, Registration::new())
    }

    /// Also install every link-time registration collected by `inventory`.
    ///
    /// They are installed before the queued registrations.
    #[cfg(feature = "inventory")]
    pub fn with_static_registrations(mut self) -> Self {
        self.statics = true;
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        let registry = Registry::new();
        #[cfg(feature = "inventory")]
        {
            if self.statics {
                registry.install_static_registrations();
            }
        }
        for (hook, func, registration) in self.entries {
            registry.register(&hook, func, registration);
        }
        registry
    }

    /// Get the number of queued registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no queued registrations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
