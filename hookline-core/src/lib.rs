//! # hookline-core
//!
//! Core types for the Hookline action/filter registry.
//!
//! This crate has minimal dependencies and holds everything that concerns a
//! single hook. The registry that owns many hooks lives in `hookline-std`.
//!
//! # Building Blocks
//!
//! - [`Value`] - the dynamically typed currency of hook arguments and filtered values
//! - [`HookFn`] - a callable handle with identity semantics
//! - [`Callback`] - a handle plus the number of arguments it accepts
//! - [`HookBucket`] - the priority-ordered callbacks of one hook
//! - [`CallbackQueue`] - a detached, ordered snapshot of a bucket, ready to run
//!
//! # Error Types
//!
//! - [`HookError`] - a callback failed during a pass
//! - [`UsageError`] - a registration that could not be honoured

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod bucket;
mod callback;
mod error;
mod value;

// Re-exports
pub use bucket::{CallbackQueue, HookBucket};
pub use callback::{Callback, HookFn, IntoCallbackResult};
pub use error::{BoxError, HookError, UsageError};
pub use value::Value;
