// Defensive JSON helpers shared by the inspectors.
//
// Fediverse servers disagree on whether list-valued fields hold a single
// object or an array, and on whether empty means absent or null. Every
// inspector treats a malformed field as a negative result, never an
// error, so the helpers here are all total.

use serde_json::Value;

/// Whether a field value counts as present.
///
/// Null, `false`, zero, the empty string, the empty array, and the empty
/// object all count as absent.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Normalize a singleton-or-list field into a slice of entries.
///
/// A bare object (or any other non-array value) becomes a one-element
/// list; a missing or null field becomes an empty one.
pub fn as_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

/// Fetch a string field from a mapping, or "" when missing or mistyped.
pub fn str_field<'a>(obj: &'a Value, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or_default()
}
