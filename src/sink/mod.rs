//! Log sinks: where emitted lines go.
//!
//! The core's only contract with a sink is "accepts a line of text,
//! appends it". Two channels exist: informational (entry/exit lines) and
//! error (failure diagnostics). Destination, format, and rotation are the
//! sink's concern.

pub mod console;
pub mod memory;
pub mod tracing;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use self::tracing::TracingSink;

use std::sync::Arc;

/// Append-only destination for log lines.
///
/// Implementations take `&self`: one sink may serve concurrent
/// invocations, and each accepted line must land as a complete unit even
/// when callers interleave.
pub trait LogSink {
    /// Append one entry/exit line to the informational channel.
    fn info(&self, line: &str);

    /// Append one failure diagnostic to the error channel.
    fn error(&self, line: &str);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn info(&self, line: &str) {
        (**self).info(line);
    }

    fn error(&self, line: &str) {
        (**self).error(line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn info(&self, line: &str) {
        (**self).info(line);
    }

    fn error(&self, line: &str) {
        (**self).error(line);
    }
}
