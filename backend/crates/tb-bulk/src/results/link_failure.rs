use crate::FailureKind;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFailure {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_issue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_issue_id: Option<String>,
    pub kind: FailureKind,
    pub error: String,
}
