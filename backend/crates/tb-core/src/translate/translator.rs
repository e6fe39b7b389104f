use crate::{
    CUSTOM_FIELDS_KEY, Command, Expectations, SHORTHAND_FIELDS, Translation, expected_field_value,
};

use serde_json::Value;

/// Translate a loosely structured update into patch, commands and
/// expectations.
///
/// - Shorthand keys are always removed from the patch; usable ones become
///   `"<DisplayName> <value>"` commands plus an expectation.
/// - `customFields` stays in the patch untouched, and each named entry with a
///   usable value adds an expectation (overriding a shorthand of the same name).
/// - Anything else passes through as a patch field.
pub fn translate(update: &Value) -> Translation {
    let Some(fields) = update.as_object() else {
        return Translation {
            patch_payload: update.clone(),
            commands: Vec::new(),
            expectations: Expectations::new(),
        };
    };

    let mut payload = fields.clone();
    let mut commands = Vec::new();
    let mut expectations = Expectations::new();

    for field in &SHORTHAND_FIELDS {
        let Some(raw) = payload.remove(field.key) else {
            continue;
        };

        if let Some(value) = field.normalize(&raw) {
            commands.push(Command::field(field.display_name, &value));
            expectations.insert(field.display_name, value);
        }
    }

    if let Some(entries) = payload.get(CUSTOM_FIELDS_KEY).and_then(Value::as_array) {
        for entry in entries {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty());

            let Some(name) = name else {
                continue;
            };

            if let Some(expected) = entry.get("value").and_then(expected_field_value) {
                expectations.insert(name, expected);
            }
        }
    }

    Translation {
        patch_payload: Value::Object(payload),
        commands,
        expectations,
    }
}
