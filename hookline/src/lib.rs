//! # hookline - Action/Filter Hook Registry
//!
//! `hookline` lets code expose named extension points ("hooks") that other
//! code attaches callbacks to. Callbacks run in priority order, lowest first,
//! and either run for side effect (actions) or transform a value one after
//! another (filters).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookline::{args, HookFn, Registry, Value};
//!
//! let hooks = Registry::new();
//! hooks.add_filter("greeting", HookFn::new(|args| format!("{}, world", args[0])), 10, 1);
//! hooks.add_action("shutdown", HookFn::new(|_| println!("bye")), 10, 1);
//!
//! assert_eq!(hooks.apply_filters("greeting", "hello", &[])?, Value::from("hello, world"));
//! hooks.do_action("shutdown", &args![])?;
//! ```
//!
//! ## Shared Default Registry
//!
//! The free functions ([`add_action`], [`do_action`], [`apply_filters`], ...)
//! operate on [`default_registry`], one instance per thread. With the
//! `macros` feature, functions annotated with `#[hookline::action]` or
//! `#[hookline::filter]` are installed there automatically.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod global;

pub use hookline_core::{
    BoxError, Callback, CallbackQueue, HookBucket, HookError, HookFn, IntoCallbackResult,
    UsageError, Value,
};

pub use hookline_std::{
    DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY, Registration, Registry, RegistryBuilder, WeakRegistry,
};

#[cfg(feature = "inventory")]
pub use hookline_std::{StaticRegistration, static_registrations};

pub use global::{
    add, add_action, add_filter, apply, apply_filters, apply_filters_ref_array, current_action,
    current_filter, default_registry, did_action, do_action, do_action_ref_array, doing_action,
    doing_filter, exec, filter, has, has_action, has_filter, remove, remove_action, remove_all,
    remove_all_actions, remove_all_filters, remove_filter,
};

/// Build an argument array, converting each element with [`Value::from`].
///
/// ```rust,ignore
/// hooks.do_action("save_post", &args![42, "draft", true])?;
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Value; 0] = [];
        empty
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Value::from($arg)),+]
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hookline_std::testing::*;
}

/// Prelude module - common imports for Hookline.
///
/// # Usage
///
/// ```rust,ignore
/// use hookline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, HookError, HookFn, IntoCallbackResult, Registration, Registry, Value, args,
    };
}

#[cfg(feature = "macros")]
pub use hookline_macros::{action, filter};

#[cfg(feature = "inventory")]
pub use inventory;
