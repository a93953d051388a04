//! # Hook
//!
//! The observer side of dispatch. A hook is an external subsystem (metrics
//! exporter, alerting sink, log shipper) that wants to see log entries at
//! certain levels without the logger core depending on it.
//!
//! Hooks run synchronously on the logging thread. A hook that must not
//! block the call site should hand the entry to its own background worker
//! and return immediately.

use crate::{error::BoxError, level::Level};
use std::sync::Arc;

/// An observer fired for log entries at the levels it declares.
///
/// `E` is the logger's entry type. The entry is shared read-only across all
/// hooks of one dispatch; the dispatcher never takes ownership of it.
///
/// # Example
///
/// ```rust
/// use levelhook_core::{BoxError, Hook, Level};
///
/// struct AlertHook;
///
/// impl Hook<String> for AlertHook {
///     fn levels(&self) -> &[Level] {
///         &[Level::Error, Level::Fatal]
///     }
///
///     fn fire(&self, entry: &String) -> Result<(), BoxError> {
///         if entry.is_empty() {
///             return Err("empty alert".into());
///         }
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Hook` for entries of type `{E}`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `levels` and `fire` for the entry type `{E}`."
)]
pub trait Hook<E>: Send + Sync {
    /// Name used to identify the hook in failure reports.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Levels this hook wants to observe.
    ///
    /// Queried once, at registration time.
    fn levels(&self) -> &[Level];

    /// Called with each entry logged at one of the declared levels.
    fn fire(&self, entry: &E) -> Result<(), BoxError>;
}

/// A hook as stored in a registry.
pub type SharedHook<E> = Arc<dyn Hook<E>>;

impl<E, H: Hook<E> + ?Sized> Hook<E> for Arc<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn levels(&self) -> &[Level] {
        (**self).levels()
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        (**self).fire(entry)
    }
}

impl<E, H: Hook<E> + ?Sized> Hook<E> for Box<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn levels(&self) -> &[Level] {
        (**self).levels()
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        (**self).fire(entry)
    }
}
