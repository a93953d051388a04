//! Entry capabilities some standard hooks rely on.

use levelhook_core::Level;

/// An entry that knows the level it was logged at.
///
/// Hooks only receive the entry, not the level passed to dispatch, so hooks
/// that need the severity (such as `TracingHook`) read it from here.
pub trait Leveled {
    /// Level the entry was logged at.
    fn level(&self) -> Level;
}

impl<T: Leveled + ?Sized> Leveled for &T {
    fn level(&self) -> Level {
        (**self).level()
    }
}
