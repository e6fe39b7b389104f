use serde_json::Value;

/// A convenience update key that the tracker only accepts through its
/// command grammar.
#[derive(Debug, Clone, Copy)]
pub struct ShorthandField {
    /// Key in the caller's update object
    pub key: &'static str,
    /// Field name used in the command and in read-back verification
    pub display_name: &'static str,
    normalize: fn(&Value) -> Option<String>,
}

impl ShorthandField {
    /// Non-empty normalized value, or `None` if the raw value is unusable
    pub fn normalize(&self, raw: &Value) -> Option<String> {
        (self.normalize)(raw)
    }
}

/// Evaluated in this order; each present, usable key yields one command and
/// one expectation.
pub const SHORTHAND_FIELDS: [ShorthandField; 5] = [
    ShorthandField {
        key: "type",
        display_name: "Type",
        normalize: normalize_text,
    },
    ShorthandField {
        key: "state",
        display_name: "State",
        normalize: normalize_text,
    },
    ShorthandField {
        key: "priority",
        display_name: "Priority",
        normalize: normalize_text,
    },
    ShorthandField {
        key: "assignee",
        display_name: "Assignee",
        normalize: normalize_assignee,
    },
    ShorthandField {
        key: "subsystem",
        display_name: "Subsystem",
        normalize: normalize_text,
    },
];

fn normalize_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// A login string, or a user object carrying a non-empty `login`
fn normalize_assignee(value: &Value) -> Option<String> {
    normalize_text(value).or_else(|| value.get("login").and_then(normalize_text))
}
