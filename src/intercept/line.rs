//! Entry and exit log line construction.

use super::{Operation, ReturnKind};
use crate::value::{formatter, Value};

const PARAM_DELIM_START: &str = "{";
const PARAM_DELIM_END: &str = "}";
const PARAM_SEPARATOR: &str = " - ";

/// Build the entry line: `Entering [Scope.op] with {a = 1 - b = 2}`.
///
/// Pairs follow declaration order. Zero parameters render as an empty
/// brace pair; joining keeps a non-empty list free of trailing separators.
pub(super) fn entry(op: &Operation, args: &[Value]) -> String {
    let pairs: Vec<String> = op
        .params
        .iter()
        .zip(args)
        .map(|(name, value)| format!("{} = {}", name, formatter::format(value)))
        .collect();

    format!(
        "Entering [{}] with {}{}{}",
        op.qualified_name(),
        PARAM_DELIM_START,
        pairs.join(PARAM_SEPARATOR),
        PARAM_DELIM_END
    )
}

/// Build the exit line: `Leaving [Scope.op] with {value}`.
///
/// Renders the literal `void` when the declared return kind is void, and
/// the literal `null` when a value-returning operation produced nothing.
/// The two are deliberately distinct: "no result expected" versus "result
/// expected but absent".
pub(super) fn exit(op: &Operation, value: &Value) -> String {
    let rendered = match (op.return_kind, value) {
        (ReturnKind::Void, _) => "void".to_string(),
        (ReturnKind::Value, Value::Null) => "null".to_string(),
        (ReturnKind::Value, value) => formatter::format(value),
    };

    format!(
        "Leaving [{}] with {}{}{}",
        op.qualified_name(),
        PARAM_DELIM_START,
        rendered,
        PARAM_DELIM_END
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD: Operation = Operation {
        scope: "Calculator",
        name: "add",
        params: &["a", "b"],
        return_kind: ReturnKind::Value,
    };

    const PING: Operation = Operation {
        scope: "Health",
        name: "ping",
        params: &[],
        return_kind: ReturnKind::Value,
    };

    const RESET: Operation = Operation {
        scope: "Counter",
        name: "reset",
        params: &[],
        return_kind: ReturnKind::Void,
    };

    #[test]
    fn test_entry_with_zero_params_has_empty_braces() {
        assert_eq!(entry(&PING, &[]), "Entering [Health.ping] with {}");
    }

    #[test]
    fn test_entry_pairs_in_declaration_order() {
        let line = entry(&ADD, &[Value::Int(2), Value::Int(3)]);
        assert_eq!(line, "Entering [Calculator.add] with {a = 2 - b = 3}");
    }

    #[test]
    fn test_entry_has_no_trailing_separator() {
        let op = Operation {
            scope: "Mixer",
            name: "mix",
            params: &["x", "y", "z"],
            return_kind: ReturnKind::Void,
        };
        let line = entry(&op, &[Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert!(line.ends_with("z = 3}"));
        assert!(!line.contains(" - }"));
    }

    #[test]
    fn test_entry_renders_null_argument() {
        let op = Operation {
            scope: "Store",
            name: "put",
            params: &["key", "value"],
            return_kind: ReturnKind::Void,
        };
        let line = entry(&op, &[Value::display("k1"), Value::Null]);
        assert_eq!(line, "Entering [Store.put] with {key = k1 - value = NULL}");
    }

    #[test]
    fn test_exit_with_value() {
        assert_eq!(exit(&ADD, &Value::Int(5)), "Leaving [Calculator.add] with {5}");
    }

    #[test]
    fn test_exit_void_for_void_return_kind() {
        assert_eq!(exit(&RESET, &Value::Null), "Leaving [Counter.reset] with {void}");
    }

    #[test]
    fn test_exit_null_for_absent_result() {
        assert_eq!(exit(&PING, &Value::Null), "Leaving [Health.ping] with {null}");
    }
}
