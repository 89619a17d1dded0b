//! Helpers over dynamic cell values
//!
//! Rows hold plain [`serde_json::Value`]s. The functions here give those
//! values the loose semantics a table needs: a display text used by search,
//! a truthiness test, and a forgiving comparison used by ordering.

use std::cmp::Ordering;

use serde_json::Number;
pub use serde_json::Value;

/// Renders a value the way it appears inside search text and plain cells.
///
/// | Value | Text |
/// |-------|------|
/// | `null` | empty |
/// | string | verbatim |
/// | integral number | digits only (`1.0` renders as `1`) |
/// | other number, bool | JSON text |
/// | array | elements rendered and joined with `,` |
/// | object | compact JSON |
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    // f64's Display drops a zero fraction, unlike the JSON text.
    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}

/// A string holding a number, read the way loose comparison reads it.
fn numeric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| !f.is_nan())
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Returns `true` unless the value is `null`, `false`, zero or an empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Compares two present, truthy values for ordering.
///
/// Strings compare case-insensitively (both sides uppercased), numbers
/// numerically, booleans with `false < true`, arrays by their uppercased
/// display text. A number against a numeric string compares numerically;
/// any other mix of kinds, and objects, compare equal.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.to_uppercase().cmp(&b.to_uppercase()),
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => compare_f64(a, b),
            _ => Ordering::Equal,
        },
        (Value::String(a), Value::Number(b)) => match (numeric(a), b.as_f64()) {
            (Some(a), Some(b)) => compare_f64(a, b),
            _ => Ordering::Equal,
        },
        (Value::Number(a), Value::String(b)) => match (a.as_f64(), numeric(b)) {
            (Some(a), Some(b)) => compare_f64(a, b),
            _ => Ordering::Equal,
        },
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Array(_), Value::Array(_)) => display_text(a)
            .to_uppercase()
            .cmp(&display_text(b).to_uppercase()),
        _ => Ordering::Equal,
    }
}
