//! Extraction of comparable strings from custom field values.
//!
//! Tracker field values are either scalars or entities exposing some of
//! `name`, `id` and `login`. Requests and read-backs use slightly different
//! rules, so both live here side by side.

use serde_json::Value;

const VALUE_KEYS: [&str; 3] = ["name", "id", "login"];

/// Value the caller asked for: the first of `name`, `id`, `login` that is a
/// non-empty string after trimming.
pub fn expected_field_value(value: &Value) -> Option<String> {
    VALUE_KEYS.iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    })
}

/// Value the tracker reports: the first of `name`, `id`, `login` that is
/// present as a string at all, trimmed. An empty `name` still wins over `id`.
pub fn actual_field_value(value: &Value) -> Option<String> {
    VALUE_KEYS
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
}
