//! The seam between the bulk engine and the issue tracker backend.

use crate::{CommandRequest, IssueSnapshot, IssueSummary, TrackerResult};

use async_trait::async_trait;
use serde_json::Value;

/// Selector for reading back custom field values
pub const VERIFY_FIELDS_SELECTOR: &str = "customFields(name,value(name,id,login))";
/// Selector for reading back an issue's links
pub const VERIFY_LINKS_SELECTOR: &str = "links(direction,linkType(name),issues(id,idReadable))";
/// Selector for resolving an internal id to its readable form
pub const READABLE_ID_SELECTOR: &str = "idReadable";
/// Selector for search results fed into criticality ranking
pub const SEARCH_SELECTOR: &str = "id,idReadable,summary,created,customFields(name,value(name))";

/// Backend operations the engine consumes. Every call is independent and
/// reports failure as `Err`.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Partial update of plain fields
    async fn update_issue(&self, issue_id: &str, fields: &Value) -> TrackerResult<()>;

    /// Execute a free-text command against the referenced issues
    async fn apply_command(&self, request: &CommandRequest) -> TrackerResult<()>;

    /// Read an issue back, limited to `fields`
    async fn fetch_issue(&self, issue_id: &str, fields: &str) -> TrackerResult<IssueSnapshot>;

    /// Issues matching a tracker query, at most `top`
    async fn search_issues(
        &self,
        query: &str,
        fields: &str,
        top: usize,
    ) -> TrackerResult<Vec<IssueSummary>>;
}
