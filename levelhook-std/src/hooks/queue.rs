//! Hook that hands entries to a background task.

use levelhook_core::{BoxError, Hook, Level};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// The receiving side of a [`QueueHook`] has been dropped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("hook queue receiver has been dropped")]
pub struct QueueClosed;

/// Sends a clone of each entry to an unbounded channel and returns at once.
///
/// Dispatch is synchronous, so a slow sink blocks the logging call site.
/// Wrapping the sink in a task that drains this queue keeps logging fast.
///
/// # Example
///
/// ```rust,ignore
/// let (hook, mut rx) = QueueHook::new("shipper", [Level::Error]);
/// hooks.add(hook);
/// tokio::spawn(async move {
///     while let Some(entry) = rx.recv().await {
///         ship(entry).await;
///     }
/// });
/// ```
pub struct QueueHook<E> {
    name: &'static str,
    levels: Vec<Level>,
    tx: UnboundedSender<E>,
}

impl<E> QueueHook<E> {
    /// Create a hook and the receiver its entries arrive on.
    pub fn new(
        name: &'static str,
        levels: impl IntoIterator<Item = Level>,
    ) -> (Self, UnboundedReceiver<E>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::from_sender(name, levels, tx), rx)
    }

    /// Create a hook sending to an existing channel.
    pub fn from_sender(
        name: &'static str,
        levels: impl IntoIterator<Item = Level>,
        tx: UnboundedSender<E>,
    ) -> Self {
        Self {
            name,
            levels: levels.into_iter().collect(),
            tx,
        }
    }
}

impl<E> Hook<E> for QueueHook<E>
where
    E: Clone + Send,
{
    fn name(&self) -> &str {
        self.name
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn fire(&self, entry: &E) -> Result<(), BoxError> {
        self.tx.send(entry.clone()).map_err(|_| QueueClosed)?;
        Ok(())
    }
}
