//! Sink that routes lines through the `tracing` facade.

use super::LogSink;

/// Emits entry/exit lines at INFO and failure diagnostics at ERROR.
///
/// For hosts that already ship a `tracing` subscriber: the line is carried
/// as the event message, so whatever formatting and filtering the
/// subscriber applies holds for interception output too.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn info(&self, line: &str) {
        tracing::info!("{}", line);
    }

    fn error(&self, line: &str) {
        tracing::error!("{}", line);
    }
}
