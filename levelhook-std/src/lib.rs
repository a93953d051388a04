//! # levelhook-std
//!
//! Standard implementations for the levelhook observer layer.
//!
//! This crate provides:
//! - **Standard hooks**: [`FnHook`], [`WriterHook`], `TracingHook`, `QueueHook`
//! - **Shared registry**: [`SharedLevelHooks`] for registration after logging starts
//! - **Testing utilities**: recording and failing hooks
//!
//! [`FnHook`]: hooks::FnHook
//! [`WriterHook`]: hooks::WriterHook
//! [`SharedLevelHooks`]: shared::SharedLevelHooks

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use levelhook_core;

// Modules
pub mod entry;
pub mod hooks;
pub mod shared;
pub mod testing;
