//! Canonical single-line rendering of captured values.

use super::Value;

/// Render a captured value as a single-line string.
///
/// Total function: every variant has a rendering and none can fail.
/// Scalars render in base 10 with their sign; absent values render as the
/// literal `NULL`; everything else falls back to its display or compact
/// JSON form.
pub fn format(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Buffer(contents) => contents.clone(),
        Value::Text(text) => text.clone(),
        Value::Json(json) => json.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_renders_uppercase_literal() {
        assert_eq!(format(&Value::Null), "NULL");
    }

    #[test]
    fn test_integral_scalars_base_10() {
        assert_eq!(format(&Value::Int(42)), "42");
        assert_eq!(format(&Value::Int(-7)), "-7");
        assert_eq!(format(&Value::Int(0)), "0");
        assert_eq!(format(&Value::Long(9_000_000_000)), "9000000000");
        assert_eq!(format(&Value::Long(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn test_float_default_display() {
        assert_eq!(format(&Value::Float(2.5)), "2.5");
        assert_eq!(format(&Value::Float(-0.25)), "-0.25");
        assert_eq!(format(&Value::Float(3.0)), "3");
    }

    #[test]
    fn test_buffer_renders_captured_contents() {
        assert_eq!(format(&Value::buffer("partial result")), "partial result");
    }

    #[test]
    fn test_display_fallback() {
        let addr = std::net::Ipv4Addr::LOCALHOST;
        assert_eq!(format(&Value::display(&addr)), "127.0.0.1");
    }

    #[test]
    fn test_json_renders_single_line() {
        let value = Value::Json(serde_json::json!({"id": 3, "tags": ["a", "b"]}));
        let rendered = format(&value);
        assert!(!rendered.contains('\n'));
        assert_eq!(rendered, r#"{"id":3,"tags":["a","b"]}"#);
    }
}
