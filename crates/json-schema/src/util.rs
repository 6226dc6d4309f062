//! Shared helpers over the parsed-value tree.

use serde_json::Value;

/// Deep equality over JSON values. Numbers compare by numeric value, so
/// `1` and `1.0` are equal.
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .zip(b.as_f64())
            .map(|(a, b)| a == b)
            .unwrap_or(false),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).map(|bv| json_equal(v, bv)).unwrap_or(false))
        }
        _ => false,
    }
}

/// Shape token of a value, as used in failure records and error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loose boolean coercion for the boolean-coercing keywords
/// (`exclusiveMaximum`, `exclusiveMinimum`, `uniqueItems`).
///
/// False values: null, `false`, zero, `""`, `"0"`, and empty
/// arrays/objects. Everything else is true.
pub fn truthiness(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Scalar-to-string coercion used by `title` and `description`.
/// Arrays and objects do not coerce.
pub fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Are the elements pairwise distinct under [`json_equal`]?
///
/// Read-only: callers that want de-duplication do it themselves before
/// validation.
pub fn all_unique(items: &[Value]) -> bool {
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if json_equal(a, b) {
                return false;
            }
        }
    }
    true
}
