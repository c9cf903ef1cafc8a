//! In-memory sink for tests and embedding hosts.

use std::sync::Mutex;

use super::LogSink;

/// Captures lines per channel behind a mutex.
///
/// Each append holds the lock for a single push, so lines from
/// interleaved invocations stay complete and arrive in append order.
#[derive(Debug, Default)]
pub struct MemorySink {
    info: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the informational channel, in append order.
    pub fn info_lines(&self) -> Vec<String> {
        self.info.lock().expect("memory sink mutex poisoned").clone()
    }

    /// Snapshot of the error channel, in append order.
    pub fn error_lines(&self) -> Vec<String> {
        self.errors.lock().expect("memory sink mutex poisoned").clone()
    }
}

impl LogSink for MemorySink {
    fn info(&self, line: &str) {
        self.info
            .lock()
            .expect("memory sink mutex poisoned")
            .push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.errors
            .lock()
            .expect("memory sink mutex poisoned")
            .push(line.to_string());
    }
}
