//! Hook that re-emits entries as `tracing` events.

use crate::entry::Leveled;
use levelhook_core::{BoxError, Hook, Level};
use std::fmt::Display;

/// Forwards entries to the active `tracing` subscriber.
///
/// The event severity is taken from the entry: panic, fatal and error map
/// to `ERROR`; the remaining levels map to their namesakes.
pub struct TracingHook {
    name: &'static str,
    levels: Vec<Level>,
}

impl TracingHook {
    /// Create a hook forwarding entries at every level.
    pub fn new(name: &'static str) -> Self {
        Self::with_levels(name, Level::ALL)
    }

    /// Create a hook forwarding entries at `levels` only.
    pub fn with_levels(name: &'static str, levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            name,
            levels: levels.into_iter().collect(),
        }
    }
}

impl<E> Hook<E> for TracingHook
where
    E: Leveled + Display,
{
    fn name(&self) -> &str {
        self.name
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        let level = entry.level();
        match level {
            Level::Panic | Level::Fatal | Level::Error => {
                tracing::error!(hook = %self.name, %level, "{entry}")
            }
            Level::Warn => tracing::warn!(hook = %self.name, "{entry}"),
            Level::Info => tracing::info!(hook = %self.name, "{entry}"),
            Level::Debug => tracing::debug!(hook = %self.name, "{entry}"),
            Level::Trace => tracing::trace!(hook = %self.name, "{entry}"),
        }
        Ok(())
    }
}
