use crate::{CUSTOM_FIELDS_KEY, Command, Expectations};

use serde::Serialize;
use serde_json::Value;

/// An update split into what can be patched directly, what must go through
/// commands, and what to check afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub patch_payload: Value,
    pub commands: Vec<Command>,
    pub expectations: Expectations,
}

impl Translation {
    /// Worth sending: any key besides `customFields`, or a non-empty
    /// `customFields` list. Non-object payloads are never sent.
    pub fn has_patch(&self) -> bool {
        let Some(fields) = self.patch_payload.as_object() else {
            return false;
        };

        let has_plain_field = fields.keys().any(|key| key != CUSTOM_FIELDS_KEY);
        let has_custom_fields = fields
            .get(CUSTOM_FIELDS_KEY)
            .and_then(Value::as_array)
            .is_some_and(|entries| !entries.is_empty());

        has_plain_field || has_custom_fields
    }
}
