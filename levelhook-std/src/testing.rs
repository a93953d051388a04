//! Testing utilities for levelhook.
//!
//! This module provides hooks that make dispatch easy to observe in tests.
//!
//! # Features
//!
//! - [`RecordingHook`]: A hook that records every entry it receives
//! - [`FailingHook`]: A hook that always fails and counts its invocations

use levelhook_core::{BoxError, Hook, Level};
use std::{
    borrow::Cow,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};
use thiserror::Error;

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all entries it receives.
///
/// Clones share the same record, so keep a clone around after handing the
/// hook to a registry.
///
/// # Example
///
/// ```rust
/// use levelhook_core::{Level, LevelHooks};
/// use levelhook_std::testing::RecordingHook;
///
/// let recorder = RecordingHook::new([Level::Warn, Level::Error]);
/// let mut hooks = LevelHooks::new();
/// hooks.add(recorder.clone());
///
/// hooks.fire(Level::Warn, &"low disk").unwrap();
/// hooks.fire(Level::Info, &"ignored").unwrap();
///
/// assert_eq!(recorder.entries(), vec!["low disk"]);
/// ```
pub struct RecordingHook<E> {
    name: Cow<'static, str>,
    levels: Vec<Level>,
    entries: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingHook<E> {
    /// Create a recording hook interested in `levels`.
    pub fn new(levels: impl IntoIterator<Item = Level>) -> Self {
        Self::named("recording", levels)
    }

    /// Create a recording hook with a custom name.
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        levels: impl IntoIterator<Item = Level>,
    ) -> Self {
        Self {
            name: name.into(),
            levels: levels.into_iter().collect(),
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<E> {
        self.lock().clone()
    }

    /// Get the number of recorded entries.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<E>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Clone for RecordingHook<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            levels: self.levels.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<E: Clone + Send> Hook<E> for RecordingHook<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        self.lock().push(entry.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Hook
// ============================================================================

/// The error every [`FailingHook`] returns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InjectedFailure(pub Cow<'static, str>);

/// A hook that always fails with the same message.
///
/// Clones share the invocation counter.
#[derive(Clone)]
pub struct FailingHook {
    name: Cow<'static, str>,
    levels: Vec<Level>,
    message: Cow<'static, str>,
    calls: Arc<AtomicUsize>,
}

impl FailingHook {
    /// Create a failing hook.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        levels: impl IntoIterator<Item = Level>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            levels: levels.into_iter().collect(),
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `fire` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E> Hook<E> for FailingHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, _entry: &E) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Box::new(InjectedFailure(self.message.clone())))
    }
}
