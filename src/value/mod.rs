//! Runtime value capture for log output.
//!
//! # Responsibilities
//! - Capture call arguments and return values into a closed set of kinds
//! - Snapshot mutable text buffers at capture time
//! - Fall back to a generic single-line display form for everything else
//!
//! # Design Decisions
//! - Tagged enum instead of runtime type dispatch: the recognized scalar
//!   kinds are fixed when the value is captured, so rendering can never
//!   regress to the generic fallback for a known scalar
//! - Composite values go through serde_json, whose `Display` is compact
//!   single-line JSON

pub mod formatter;

pub use formatter::format;

use std::fmt;

/// A captured runtime value, tagged with how it should be rendered.
///
/// The scalar variants mirror the formatter's priority order;
/// [`Value::Text`] and [`Value::Json`] are the generic fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent reference value.
    Null,
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// Single-precision float.
    Float(f32),
    /// Snapshot of a growable text buffer, taken at capture time.
    Buffer(String),
    /// Generic display form of any other value.
    Text(String),
    /// Structured value, rendered as compact single-line JSON.
    Json(serde_json::Value),
}

impl Value {
    /// Capture any displayable value through its canonical display form.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Text(value.to_string())
    }

    /// Snapshot the current contents of a growable text buffer.
    ///
    /// Later mutation of `buf` cannot affect the captured value or any
    /// log line already built from it.
    pub fn buffer(buf: &str) -> Self {
        Value::Buffer(buf.to_owned())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Capture path for values the caller still needs afterwards.
///
/// Return values are logged and then handed back to the caller unchanged,
/// so capturing them must borrow rather than consume.
pub trait AsLogValue {
    fn as_log_value(&self) -> Value;
}

impl AsLogValue for i32 {
    fn as_log_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl AsLogValue for i64 {
    fn as_log_value(&self) -> Value {
        Value::Long(*self)
    }
}

impl AsLogValue for f32 {
    fn as_log_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl AsLogValue for str {
    fn as_log_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl AsLogValue for String {
    fn as_log_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl AsLogValue for bool {
    fn as_log_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl AsLogValue for () {
    fn as_log_value(&self) -> Value {
        Value::Null
    }
}

impl AsLogValue for serde_json::Value {
    fn as_log_value(&self) -> Value {
        Value::Json(self.clone())
    }
}

impl AsLogValue for Value {
    fn as_log_value(&self) -> Value {
        self.clone()
    }
}

impl<T: AsLogValue> AsLogValue for Option<T> {
    fn as_log_value(&self) -> Value {
        match self {
            Some(inner) => inner.as_log_value(),
            None => Value::Null,
        }
    }
}
