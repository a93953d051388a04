//! # Shared Registry
//!
//! [`LevelHooks`] needs `&mut self` to register, which is enough when all
//! hooks are added during logger setup. [`SharedLevelHooks`] wraps it in a
//! read-write lock so hooks can be added while other threads are logging.
//!
//! Dispatch holds the read lock only long enough to clone the level's hook
//! list, then fans out over that snapshot. Hooks may therefore fire or
//! register on the same registry from inside `fire`. Hooks added while a
//! dispatch is running take effect from the next dispatch.

use levelhook_core::{Hook, HookFailures, Level, LevelHooks, SharedHook, fire_hooks};
use std::{
    fmt,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A [`LevelHooks`] that can be registered into through `&self`.
///
/// # Example
///
/// ```rust
/// use levelhook_core::Level;
/// use levelhook_std::{hooks::FnHook, shared::SharedLevelHooks};
/// use std::sync::Arc;
///
/// let hooks = Arc::new(SharedLevelHooks::<String>::new());
///
/// let setup = Arc::clone(&hooks);
/// std::thread::spawn(move || {
///     setup.add(FnHook::new("late", [Level::Warn], |_: &String| Ok(())));
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(hooks.len_for(Level::Warn), 1);
/// assert!(hooks.fire(Level::Warn, &"careful".to_string()).is_ok());
/// ```
pub struct SharedLevelHooks<E: 'static> {
    inner: RwLock<LevelHooks<E>>,
}

impl<E: 'static> SharedLevelHooks<E> {
    /// Create an empty shared registry.
    pub fn new() -> Self {
        Self::from_hooks(LevelHooks::new())
    }

    /// Share an already populated registry.
    pub fn from_hooks(hooks: LevelHooks<E>) -> Self {
        Self {
            inner: RwLock::new(hooks),
        }
    }

    /// Register a hook under every level it declares.
    pub fn add<H: Hook<E> + 'static>(&self, hook: H) {
        self.write().add(hook);
    }

    /// Register an already shared hook under every level it declares.
    pub fn add_shared(&self, hook: SharedHook<E>) {
        self.write().add_shared(hook);
    }

    /// Fire every hook registered for `level`, in registration order.
    ///
    /// See [`LevelHooks::fire`].
    pub fn fire(&self, level: Level, entry: &E) -> Result<(), HookFailures<E>> {
        let hooks = self.read().snapshot(level);
        fire_hooks(&hooks, level, entry)
    }

    /// Number of hooks registered for `level`.
    pub fn len_for(&self, level: Level) -> usize {
        self.read().len_for(level)
    }

    /// Total number of registrations across all levels.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if no hook is registered for any level.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Take the registry back out of the lock.
    pub fn into_inner(self) -> LevelHooks<E> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // Registration only appends, so a hook that panicked mid-dispatch
    // cannot have left the registry half-written.
    fn read(&self) -> RwLockReadGuard<'_, LevelHooks<E>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LevelHooks<E>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: 'static> Default for SharedLevelHooks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> From<LevelHooks<E>> for SharedLevelHooks<E> {
    fn from(hooks: LevelHooks<E>) -> Self {
        Self::from_hooks(hooks)
    }
}

impl<E: 'static> fmt::Debug for SharedLevelHooks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedLevelHooks").field(&*self.read()).finish()
    }
}
