use tb_core::{Command, CommandRequest, IssueTracker, TrackerResult};

use log::debug;

/// Send one command against one issue.
///
/// The issue is referenced by internal id or readable id depending on its
/// shape. Backend failures are returned to the caller untouched.
pub async fn apply_command(
    tracker: &dyn IssueTracker,
    issue_id: &str,
    command: &Command,
) -> TrackerResult<()> {
    let request = CommandRequest::single(issue_id, command);
    debug!("Applying command '{}' to {}", request.query, issue_id);

    tracker.apply_command(&request).await
}
