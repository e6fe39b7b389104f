use crate::ResolutionKind;

use tb_core::Command;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSuccess {
    /// Position of the request in the input list
    pub index: usize,
    pub source_issue_id: String,
    /// Target as it was put into the command (resolved when possible)
    pub target_issue_id: String,
    pub command: Command,
    pub verified: bool,
    pub target_resolution: ResolutionKind,
}
