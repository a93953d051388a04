//! Standard hook implementations.

mod func;
#[cfg(feature = "tokio")]
mod queue;
#[cfg(feature = "tracing")]
mod trace;
mod writer;

pub use func::FnHook;
#[cfg(feature = "tokio")]
pub use queue::{QueueClosed, QueueHook};
#[cfg(feature = "tracing")]
pub use trace::TracingHook;
pub use writer::WriterHook;
