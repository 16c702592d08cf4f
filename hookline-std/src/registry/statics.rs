//! Link-time registrations collected with `inventory`.
//!
//! Entries are usually produced by the `#[action]` and `#[filter]` attribute
//! macros, but can also be submitted by hand:
//!
//! ```rust,ignore
//! fn greet(args: &[Value]) -> Result<Value, BoxError> {
//!     Ok(Value::from(format!("hello {}", args[0])))
//! }
//!
//! inventory::submit! { StaticRegistration::new("greeting", 10, 1, greet) }
//! ```

use super::{Registration, Registry};
use hookline_core::{BoxError, HookFn, Value};

/// A callback registered at link time.
///
/// This struct is submitted to `inventory` for automatic collection.
#[derive(Debug, Clone, Copy)]
pub struct StaticRegistration {
    /// Hook name.
    pub hook: &'static str,
    /// Priority (lower = executed first).
    pub priority: i32,
    /// Cap on forwarded arguments.
    pub accepted_args: usize,
    /// The callback.
    pub callback: fn(&[Value]) -> Result<Value, BoxError>,
}

impl StaticRegistration {
    /// Create a registration entry.
    pub const fn new(
        hook: &'static str,
        priority: i32,
        accepted_args: usize,
        callback: fn(&[Value]) -> Result<Value, BoxError>,
    ) -> Self {
        Self {
            hook,
            priority,
            accepted_args,
            callback,
        }
    }

    fn registration(&self) -> Registration {
        Registration::new()
            .with_priority(self.priority)
            .with_accepted_args(self.accepted_args)
    }
}

inventory::collect!(StaticRegistration);

/// Every collected registration, in the order `inventory` yields them.
pub fn static_registrations() -> impl Iterator<Item = &'static StaticRegistration> {
    inventory::iter::<StaticRegistration>.into_iter()
}

impl Registry {
    /// Register every collected [`StaticRegistration`].
    ///
    /// Each call creates fresh callback handles, so installing twice runs
    /// every static callback twice. Returns the number installed.
    pub fn install_static_registrations(&self) -> usize {
        let mut installed = 0;
        for entry in static_registrations() {
            self.register(entry.hook, HookFn::from_fn(entry.callback), entry.registration());
            installed += 1;
        }
        tracing::debug!(installed, "installed static registrations");
        installed
    }
}
