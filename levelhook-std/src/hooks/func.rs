//! Closure-backed hook.

use levelhook_core::{BoxError, Hook, Level};
use std::borrow::Cow;

/// A hook built from a name, a level set and a closure.
///
/// # Example
///
/// ```rust
/// use levelhook_core::{Level, LevelHooks};
/// use levelhook_std::hooks::FnHook;
///
/// let mut hooks = LevelHooks::<String>::new();
/// hooks.add(FnHook::new("alert", [Level::Error], |entry: &String| {
///     if entry.contains("disk") {
///         return Err("pager unreachable".into());
///     }
///     Ok(())
/// }));
///
/// assert!(hooks.fire(Level::Error, &"disk full".to_string()).is_err());
/// ```
pub struct FnHook<F> {
    name: Cow<'static, str>,
    levels: Vec<Level>,
    f: F,
}

impl<F> FnHook<F> {
    /// Create a hook that calls `f` for entries at any of `levels`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        levels: impl IntoIterator<Item = Level>,
        f: F,
    ) -> Self {
        Self {
            name: name.into(),
            levels: levels.into_iter().collect(),
            f,
        }
    }

    /// Create a hook that calls `f` for entries at every level.
    pub fn all_levels(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self::new(name, Level::ALL, f)
    }
}

impl<E, F> Hook<E> for FnHook<F>
where
    F: Fn(&E) -> Result<(), BoxError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        (self.f)(entry)
    }
}
