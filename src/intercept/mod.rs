//! The call interceptor: a decorator wrapping one operation invocation.
//!
//! # Responsibilities
//! - Emit an entry line before the wrapped body runs
//! - Invoke the body with its arguments untouched
//! - Emit an exit line on success, or a failure diagnostic on error
//! - Hand the outcome back to the caller unchanged
//!
//! # Design Decisions
//! - Explicit decorator composition instead of runtime weaving: the host
//!   declares static metadata (scope, name, parameter names, return kind)
//!   at wrap time, so no reflection surface is needed
//! - The interceptor is unconditional; deciding which operations get
//!   wrapped is the host's selection policy

mod line;

use std::convert::Infallible;
use std::fmt;

use crate::sink::LogSink;
use crate::value::{AsLogValue, Value};

/// Whether an operation's declared return kind is void or value-returning.
///
/// Taken from the static signature, not from the produced value: a
/// value-returning operation that yields nothing logs `null`, a void one
/// logs `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Void,
    Value,
}

/// Static metadata for one wrapped operation, declared at wrap time.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Declaring scope (type, module, service) the operation belongs to.
    pub scope: &'static str,
    /// Operation name within the scope.
    pub name: &'static str,
    /// Parameter names in declaration order. Must match the argument slice
    /// passed to [`Interceptor::call`] in length and order.
    pub params: &'static [&'static str],
    pub return_kind: ReturnKind,
}

impl Operation {
    pub fn new(
        scope: &'static str,
        name: &'static str,
        params: &'static [&'static str],
        return_kind: ReturnKind,
    ) -> Self {
        Self {
            scope,
            name,
            params,
            return_kind,
        }
    }

    /// `Scope.name` form used in the bracketed identity of log lines.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.scope, self.name)
    }
}

/// Wraps operation invocations with entry/exit logging.
///
/// Holds only the sink. No state is carried across invocations, so one
/// interceptor serves concurrent callers without coordination; interleaved
/// invocations may interleave their lines in the sink, but each line is a
/// complete unit.
#[derive(Debug)]
pub struct Interceptor<S> {
    sink: S,
}

impl<S: LogSink> Interceptor<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The sink lines are emitted to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Invoke a fallible operation with entry/exit logging.
    ///
    /// The entry line is emitted before `body` runs. On success the exit
    /// line is emitted and the value returned unchanged. On failure exactly
    /// one diagnostic line goes to the error channel and the identical
    /// error value is returned; no exit line is emitted on that path.
    pub fn call<R, E, F>(&self, op: &Operation, args: &[Value], body: F) -> Result<R, E>
    where
        R: AsLogValue,
        E: fmt::Display,
        F: FnOnce() -> Result<R, E>,
    {
        debug_assert_eq!(
            op.params.len(),
            args.len(),
            "parameter names and values must have equal length"
        );

        self.sink.info(&line::entry(op, args));

        match body() {
            Ok(value) => {
                self.sink.info(&line::exit(op, &value.as_log_value()));
                Ok(value)
            }
            Err(err) => {
                self.sink.error(&format!("Exception received: {}", err));
                Err(err)
            }
        }
    }

    /// Invoke an operation that cannot fail.
    pub fn call_infallible<R, F>(&self, op: &Operation, args: &[Value], body: F) -> R
    where
        R: AsLogValue,
        F: FnOnce() -> R,
    {
        match self.call::<R, Infallible, _>(op, args, || Ok(body())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}
