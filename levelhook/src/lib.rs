//! # levelhook - Level-keyed observer hooks for structured loggers
//!
//! `levelhook` lets metrics exporters, alerting sinks and log shippers
//! observe log entries without the logger core depending on them. A logger
//! owns a [`LevelHooks`] registry, hooks declare the levels they care about,
//! and every emitted entry is fanned out to the hooks of its level.
//!
//! Dispatch is synchronous and fault-isolating: every hook runs, and the
//! ones that failed come back as a [`HookFailures`] report for the logger
//! to act on.
//!
//! ## Quick Start
//!
//! ```rust
//! use levelhook::prelude::*;
//!
//! struct Metrics;
//!
//! impl Hook<String> for Metrics {
//!     fn name(&self) -> &str {
//!         "metrics"
//!     }
//!     fn levels(&self) -> &[Level] {
//!         &[Level::Warn, Level::Error]
//!     }
//!     fn fire(&self, _entry: &String) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut hooks = LevelHooks::new();
//! hooks.add(Metrics);
//!
//! // Inside the logger, after level filtering:
//! if let Err(failures) = hooks.fire(Level::Error, &"request failed".to_string()) {
//!     for failure in &failures {
//!         eprintln!("{failure}");
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: diagnostics from the registry, plus `hooks::TracingHook`
//! - `tokio`: `hooks::QueueHook` for handing entries to a background task

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use levelhook_core::{
    BoxError, Hook, HookFailure, HookFailures, Level, LevelHooks, LevelParseError, SharedHook,
    fire_hooks,
};

pub use levelhook_std::{entry::Leveled, shared::SharedLevelHooks};

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use levelhook_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use levelhook_std::testing::*;
}

/// Prelude module - common imports for levelhook.
///
/// # Usage
///
/// ```rust,ignore
/// use levelhook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Hook, HookFailure, HookFailures, Level, LevelHooks, Leveled, SharedLevelHooks,
    };
}
