//! # levelhook-core
//!
//! Core traits and level-keyed dispatch for the levelhook observer layer.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! logger cores and hook implementors that don't need the standard hooks
//! shipped in `levelhook-std`.
//!
//! # Pieces
//!
//! ## [`Level`]
//!
//! The severity used as the dispatch key. Parsing from configuration text or
//! numbers is strict; an unknown level never reaches a registry.
//!
//! ## [`Hook`]
//!
//! An observer that declares a name, the levels it cares about, and a
//! `fire` method receiving the entry by shared reference.
//!
//! ## [`LevelHooks`]
//!
//! The registry and the dispatcher in one type. Hooks are appended under
//! every level they declare; [`LevelHooks::fire`] invokes every hook for a
//! level in registration order and keeps going past failures.
//!
//! # Error Types
//!
//! - [`HookFailures`] - Aggregated report of failed hooks from one dispatch
//! - [`HookFailure`] - A single failed hook together with its error
//! - [`LevelParseError`] - Rejected textual or numeric level

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
mod level;
mod registry;

// Re-exports
pub use error::{BoxError, HookFailure, HookFailures, LevelParseError};
pub use hook::{Hook, SharedHook};
pub use level::Level;
pub use registry::{LevelHooks, fire_hooks};
