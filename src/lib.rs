//! Call-interception logging library.
//!
//! Wraps explicitly selected operations so that every invocation emits an
//! "Entering" line (operation identity plus parameter names and values)
//! before the call runs and a "Leaving" line (return value, or a void
//! marker) after it completes. Failures are logged to the error channel and
//! handed back to the caller unchanged.
//!
//! # Data Flow
//! ```text
//! host code                     autolog
//! ─────────                     ───────
//! selected operation ──wrap──▶ Interceptor::call
//!                                ├─ entry line ──▶ LogSink (info channel)
//!                                ├─ invoke wrapped body
//!                                ├─ exit line ───▶ LogSink (info channel)
//!                                └─ failure ─────▶ LogSink (error channel),
//!                                                  then re-raised
//! ```
//!
//! Which operations get wrapped is the host's selection policy; the
//! interceptor itself is unconditional and applies to whatever it is handed.

pub mod intercept;
pub mod sink;
pub mod value;

pub use intercept::{Interceptor, Operation, ReturnKind};
pub use sink::{ConsoleSink, LogSink, MemorySink, TracingSink};
pub use value::{format, AsLogValue, Value};
