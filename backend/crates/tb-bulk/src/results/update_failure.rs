use crate::FailureKind;

use tb_core::FieldMismatch;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFailure {
    pub issue_id: String,
    pub kind: FailureKind,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatches: Option<Vec<FieldMismatch>>,
}

impl UpdateFailure {
    pub fn new<S: Into<String>>(issue_id: &str, kind: FailureKind, error: S) -> Self {
        Self {
            issue_id: issue_id.to_string(),
            kind,
            error: error.into(),
            mismatches: None,
        }
    }
}
