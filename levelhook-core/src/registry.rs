//! Level-keyed hook registry and fan-out dispatch.
//!
//! [`LevelHooks`] stores hooks under every level they declare and fires
//! them in registration order. A failing hook never keeps later hooks from
//! running; failures are handed back to the caller as data.

use crate::{
    error::{HookFailure, HookFailures},
    hook::{Hook, SharedHook},
    level::Level,
};
use std::{collections::HashMap, fmt, sync::Arc};

/// Hooks registered on a logger, keyed by level.
///
/// Registration is append-only. A hook registered twice is fired twice.
///
/// # Example
///
/// ```rust
/// use levelhook_core::{BoxError, Hook, Level, LevelHooks};
///
/// struct DiskSink;
///
/// impl Hook<String> for DiskSink {
///     fn name(&self) -> &str {
///         "disk"
///     }
///     fn levels(&self) -> &[Level] {
///         &[Level::Error]
///     }
///     fn fire(&self, _entry: &String) -> Result<(), BoxError> {
///         Err("disk full".into())
///     }
/// }
///
/// let mut hooks = LevelHooks::new();
/// hooks.add(DiskSink);
///
/// let failures = hooks.fire(Level::Error, &"boom".to_string()).unwrap_err();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].hook.name(), "disk");
/// assert!(hooks.fire(Level::Info, &"fine".to_string()).is_ok());
/// ```
pub struct LevelHooks<E: 'static> {
    hooks: HashMap<Level, Vec<SharedHook<E>>>,
}

impl<E: 'static> LevelHooks<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register a hook under every level it declares.
    pub fn add<H: Hook<E> + 'static>(&mut self, hook: H) {
        self.add_shared(Arc::new(hook));
    }

    /// Register an already shared hook under every level it declares.
    ///
    /// Passing clones of the same `Arc` registers the same hook again.
    /// A level listed more than once in one declaration is registered once.
    pub fn add_shared(&mut self, hook: SharedHook<E>) {
        let declared = hook.levels();
        let mut seen = Vec::with_capacity(declared.len());
        for &level in declared {
            if seen.contains(&level) {
                continue;
            }
            seen.push(level);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(hook = %hook.name(), levels = ?seen, "Registering hook");

        for level in seen {
            self.hooks.entry(level).or_default().push(Arc::clone(&hook));
        }
    }

    /// Fire every hook registered for `level`, in registration order.
    ///
    /// Returns `Ok(())` when no hook failed, including when none are
    /// registered. Otherwise returns every failure, in invocation order.
    pub fn fire(&self, level: Level, entry: &E) -> Result<(), HookFailures<E>> {
        fire_hooks(self.hooks(level), level, entry)
    }

    /// Clone out the hooks registered for `level`, in registration order.
    ///
    /// Pair with [`fire_hooks`] to dispatch without borrowing the registry.
    pub fn snapshot(&self, level: Level) -> Vec<SharedHook<E>> {
        self.hooks(level).cloned().collect()
    }

    /// Iterate over the hooks registered for `level`, in registration order.
    pub fn hooks(&self, level: Level) -> impl Iterator<Item = &SharedHook<E>> {
        self.hooks.get(&level).into_iter().flatten()
    }

    /// Levels that have at least one hook, most severe first.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        Level::ALL
            .into_iter()
            .filter(|level| self.len_for(*level) > 0)
    }

    /// Number of hooks registered for `level`.
    pub fn len_for(&self, level: Level) -> usize {
        self.hooks.get(&level).map_or(0, Vec::len)
    }

    /// Total number of registrations across all levels.
    pub fn len(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }

    /// Check if no hook is registered for any level.
    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(Vec::is_empty)
    }
}

/// Fire `hooks` in order with `entry`, collecting every failure.
///
/// `level` is the level being dispatched; it is only used for diagnostics.
/// This is the loop behind [`LevelHooks::fire`], exposed for callers that
/// dispatch over a [`LevelHooks::snapshot`].
pub fn fire_hooks<'a, E: 'static>(
    hooks: impl IntoIterator<Item = &'a SharedHook<E>>,
    level: Level,
    entry: &E,
) -> Result<(), HookFailures<E>> {
    #[cfg(not(feature = "tracing"))]
    let _ = level;

    let mut failures = Vec::new();
    for hook in hooks {
        if let Err(error) = hook.fire(entry) {
            #[cfg(feature = "tracing")]
            tracing::debug!(hook = %hook.name(), %level, %error, "Hook failed to fire");

            failures.push(HookFailure {
                hook: Arc::clone(hook),
                error,
            });
        }
    }

    match HookFailures::from_vec(failures) {
        Some(failures) => Err(failures),
        None => Ok(()),
    }
}

impl<E: 'static> Default for LevelHooks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Extend<SharedHook<E>> for LevelHooks<E> {
    fn extend<I: IntoIterator<Item = SharedHook<E>>>(&mut self, iter: I) {
        for hook in iter {
            self.add_shared(hook);
        }
    }
}

impl<E: 'static> FromIterator<SharedHook<E>> for LevelHooks<E> {
    fn from_iter<I: IntoIterator<Item = SharedHook<E>>>(iter: I) -> Self {
        let mut hooks = Self::new();
        hooks.extend(iter);
        hooks
    }
}

impl<E: 'static> fmt::Debug for LevelHooks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for level in self.levels() {
            let names: Vec<&str> = self.hooks(level).map(|hook| hook.name()).collect();
            map.entry(&level, &names);
        }
        map.finish()
    }
}
