use crate::Client;

use tb_core::{
    CommandRequest, IssueSnapshot, IssueSummary, IssueTracker, TrackerError, TrackerResult,
};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[async_trait]
impl IssueTracker for Client {
    async fn update_issue(&self, issue_id: &str, fields: &Value) -> TrackerResult<()> {
        self.post_issue_fields(issue_id, fields).await?;
        Ok(())
    }

    async fn apply_command(&self, request: &CommandRequest) -> TrackerResult<()> {
        self.post_command(request).await?;
        Ok(())
    }

    async fn fetch_issue(&self, issue_id: &str, fields: &str) -> TrackerResult<IssueSnapshot> {
        let body = self.get_issue(issue_id, fields).await?;
        decode(body, "issue")
    }

    async fn search_issues(
        &self,
        query: &str,
        fields: &str,
        top: usize,
    ) -> TrackerResult<Vec<IssueSummary>> {
        let body = self.list_issues(query, fields, top).await?;
        decode(body, "issue list")
    }
}

fn decode<T: DeserializeOwned>(body: Value, what: &str) -> TrackerResult<T> {
    serde_json::from_value(body)
        .map_err(|e| TrackerError::decode(format!("unexpected {} response: {}", what, e)))
}
