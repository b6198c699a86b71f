//! Typed parsing of environment variable values

use serde_yaml::Value;

/// Parse a raw environment variable value into a typed YAML value.
///
/// Comma-separated input becomes an ordered list; each element is parsed as a
/// single scalar and never split again. Everything else falls through
/// integer -> float -> string, so parsing never fails: an unrecognized value
/// simply stays a string.
///
/// Examples:
/// - `""` -> null
/// - `"TRUE"` -> true
/// - `"6700,6701,6702"` -> [6700, 6701, 6702]
/// - `"0.05"` -> 0.05
/// - `"nimbus1"` -> "nimbus1"
pub fn parse_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }

    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if raw.contains(',') {
        let items = raw.split(',').map(|item| parse_scalar(item.trim())).collect();
        return Value::Sequence(items);
    }

    // Single values are not trimmed; " 8080" stays a string.
    parse_scalar(raw)
}

/// Parse one scalar: integer, then float, then the string unchanged.
///
/// List elements come through here directly, so `"true"` inside a list stays
/// a string; only a whole-value boolean match is recognized in
/// [`parse_value`].
fn parse_scalar(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = raw.parse::<f64>() {
        return Value::from(float);
    }
    Value::String(raw.to_string())
}

/// Human-readable tag for a value, used in conflict diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
