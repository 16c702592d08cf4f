//! # hookline-std
//!
//! Standard registry implementation for the Hookline action/filter registry.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], [`WeakRegistry`], [`RegistryBuilder`], [`Registration`]
//! - **Static registration** (feature `inventory`): [`StaticRegistration`]
//! - **Testing**: callbacks for asserting on execution, in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use hookline_core;

// Modules
pub mod registry;
pub mod testing;

pub use registry::{
    DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY, Registration, Registry, RegistryBuilder, WeakRegistry,
};
#[cfg(feature = "inventory")]
pub use registry::{StaticRegistration, static_registrations};

#[cfg(feature = "inventory")]
pub use inventory;
