//! Error types for Hookline.
//!
//! - [`HookError`] - A callback failed while an action or filter was running
//! - [`UsageError`] - The registry was called with something it cannot register
//!
//! Callbacks report their own failures as a [`BoxError`].

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while running the callbacks of a hook.
#[derive(Error, Debug)]
pub enum HookError {
    /// A registered callback returned an error.
    ///
    /// Callbacks that ran earlier in the same pass are not rolled back.
    #[error("callback for hook `{hook}` failed: {source}")]
    Callback {
        /// Name of the hook whose callback failed.
        hook: String,
        /// The error returned by the callback.
        #[source]
        source: BoxError,
    },
}

impl HookError {
    /// Name of the hook that was running when the error occurred.
    pub fn hook(&self) -> &str {
        match self {
            HookError::Callback { hook, .. } => hook,
        }
    }

    /// Consume the error, returning the callback's own error.
    pub fn into_source(self) -> BoxError {
        match self {
            HookError::Callback { source, .. } => source,
        }
    }
}

/// Misuse of the registration API.
///
/// These are never returned to the caller; the registry reports them as
/// diagnostics and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The value given as a callback is not invocable.
    #[error("the callback for hook '{hook}' must be a function, got {found}")]
    NotCallable {
        /// Name of the hook the registration targeted.
        hook: String,
        /// Kind of the value that was passed instead.
        found: &'static str,
    },
}
