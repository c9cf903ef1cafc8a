//! Console sink: stdout for entry/exit lines, stderr for diagnostics.

use std::io::{self, Write};

use super::LogSink;

/// Writes each line to the process's standard streams.
///
/// Every line is flushed as it is written: the entry line must reach the
/// sink before the wrapped call runs, even if the process aborts inside
/// it. Write errors are ignored; logging is best-effort and wrapping must
/// not introduce failure modes of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn info(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    fn error(&self, line: &str) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{}", line);
        let _ = err.flush();
    }
}
