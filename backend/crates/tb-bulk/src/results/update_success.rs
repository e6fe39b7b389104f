use tb_core::Command;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSuccess {
    pub issue_id: String,
    /// Commands that were sent, in order
    pub commands: Vec<Command>,
    /// True only when read-back confirmed at least one expected field
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_fields: Option<BTreeMap<String, String>>,
}
