use crate::{CoreError, Result as CoreResult};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One link to create: `source <linkCommand> target`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub source_issue_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub target_issue_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_command: Option<String>,
}

impl LinkRequest {
    pub fn new(source: &str, target: &str, link_command: Option<&str>) -> Self {
        Self {
            source_issue_id: Some(source.to_string()),
            target_issue_id: Some(target.to_string()),
            link_command: link_command.map(String::from),
        }
    }

    /// Trimmed `(source, target)`, or a validation error naming the first
    /// missing id
    #[track_caller]
    pub fn validated_ids(&self) -> CoreResult<(String, String)> {
        let source = Self::required(self.source_issue_id.as_deref(), "sourceIssueId")?;
        let target = Self::required(self.target_issue_id.as_deref(), "targetIssueId")?;
        Ok((source, target))
    }

    #[track_caller]
    fn required(value: Option<&str>, field: &str) -> CoreResult<String> {
        match value.map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id.to_string()),
            _ => Err(CoreError::validation(format!(
                "{} must be a non-empty string",
                field
            ))),
        }
    }
}

/// Non-string ids (numbers, objects, null) deserialize as `None` and are
/// reported by `validated_ids`
fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(Some(id)),
        _ => Ok(None),
    }
}
