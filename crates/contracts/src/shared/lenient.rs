//! Tolerant readers for loosely-typed JSON.
//!
//! Session data is cached client-side and may be stale, partially written or
//! produced by an older backend. These helpers read what is there and treat
//! everything else as absent instead of failing.

use serde_json::Value;

/// Array stored under `key`. Missing, `null` and non-array values read as empty.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String stored under `key`, if it is a string.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Owned, non-empty string stored under `key`.
pub fn opt_string_field(value: &Value, key: &str) -> Option<String> {
    str_field(value, key)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Elements of `items` that are JSON objects; scalars and nested arrays are skipped.
pub fn objects(items: &[Value]) -> impl Iterator<Item = &Value> {
    items.iter().filter(|item| item.is_object())
}
