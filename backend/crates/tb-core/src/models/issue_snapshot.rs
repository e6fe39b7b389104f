use crate::actual_field_value;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Partial issue as returned by a fetch; which parts are present depends on
/// the field selector that was sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSnapshot {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub id_readable: Option<String>,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomFieldSnapshot>>,
    #[serde(default)]
    pub links: Option<Vec<IssueLink>>,
}

impl IssueSnapshot {
    /// Look up a custom field by its exact name
    pub fn custom_field(&self, name: &str) -> Option<&CustomFieldSnapshot> {
        self.custom_fields
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|field| field.name.as_deref() == Some(name))
    }

    /// True if any linked issue, in any direction, matches `target`
    pub fn has_link_to(&self, target: &str) -> bool {
        let target = target.trim();
        self.links
            .as_deref()
            .unwrap_or_default()
            .iter()
            .flat_map(|link| link.issues.iter())
            .any(|issue| issue.matches(target))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl CustomFieldSnapshot {
    /// `value.name ?? value.id ?? value.login`
    pub fn resolved_value(&self) -> Option<String> {
        self.value.as_ref().and_then(actual_field_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub link_type: Option<LinkType>,
    #[serde(default)]
    pub issues: Vec<LinkedIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkType {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedIssue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub id_readable: Option<String>,
}

impl LinkedIssue {
    /// Compare trimmed readable id, then trimmed internal id, against an
    /// already-trimmed target
    pub fn matches(&self, target: &str) -> bool {
        [self.id_readable.as_deref(), self.id.as_deref()]
            .into_iter()
            .flatten()
            .any(|id| id.trim() == target)
    }
}
