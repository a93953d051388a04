//! Error types for levelhook.
//!
//! - [`HookFailure`] - One hook that returned an error during dispatch
//! - [`HookFailures`] - Every failure from one dispatch, in invocation order
//! - [`LevelParseError`] - A textual or numeric level that names no [`Level`]
//!
//! [`Level`]: crate::Level

use crate::hook::SharedHook;
use std::{fmt, ops::Deref};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A single failed hook invocation.
#[derive(Error)]
#[error("hook `{}` failed: {error}", .hook.name())]
pub struct HookFailure<E: 'static> {
    /// The hook that failed.
    pub hook: SharedHook<E>,
    /// The error the hook returned.
    #[source]
    pub error: BoxError,
}

impl<E: 'static> fmt::Debug for HookFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookFailure")
            .field("hook", &self.hook.name())
            .field("error", &self.error)
            .finish()
    }
}

/// Failures collected from one dispatch, in the order the hooks ran.
///
/// Never empty: a dispatch in which every hook succeeded returns `Ok(())`
/// instead of a report.
#[derive(Error)]
#[error("{} hook(s) failed", .0.len())]
pub struct HookFailures<E: 'static>(Vec<HookFailure<E>>);

impl<E: 'static> HookFailures<E> {
    /// Wrap collected failures, or `None` when nothing failed.
    pub(crate) fn from_vec(failures: Vec<HookFailure<E>>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self(failures))
        }
    }

    /// Consume the report, returning the individual failures.
    pub fn into_vec(self) -> Vec<HookFailure<E>> {
        self.0
    }
}

impl<E: 'static> Deref for HookFailures<E> {
    type Target = [HookFailure<E>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: 'static> IntoIterator for HookFailures<E> {
    type Item = HookFailure<E>;
    type IntoIter = std::vec::IntoIter<HookFailure<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E: 'static> IntoIterator for &'a HookFailures<E> {
    type Item = &'a HookFailure<E>;
    type IntoIter = std::slice::Iter<'a, HookFailure<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: 'static> fmt::Debug for HookFailures<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Errors produced when reading a [`Level`](crate::Level) from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelParseError {
    /// The name matches no level.
    #[error("unknown log level: {0:?}")]
    UnknownName(String),

    /// The number is past the least severe level.
    #[error("log level {0} is out of range (expected 0..=6)")]
    OutOfRange(u8),
}
