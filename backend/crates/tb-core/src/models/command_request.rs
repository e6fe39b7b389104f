use crate::{Command, IssueRef};

use serde::Serialize;

/// Body of a command submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRequest {
    pub query: String,
    pub issues: Vec<IssueRef>,
}

impl CommandRequest {
    /// Target exactly one issue, classified as internal or readable by shape
    pub fn single(issue_id: &str, command: &Command) -> Self {
        Self {
            query: command.as_str().trim().to_string(),
            issues: vec![IssueRef::classify(issue_id)],
        }
    }
}
