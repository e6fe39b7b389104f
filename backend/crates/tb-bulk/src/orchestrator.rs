use crate::{
    BulkError, BulkLinkResult, BulkUpdateResult, FailureKind, FieldVerification, LinkFailure,
    LinkOptions, LinkSuccess, Result, UpdateFailure, UpdateSuccess, apply_command,
    resolve_readable_id, verify_fields, verify_link,
};

use tb_core::{
    Command, Criticality, DEFAULT_LINK_COMMAND, IssueSummary, IssueTracker, LinkRequest, Ranked,
    Translation, TrackerResult, rank_by_criticality, tracker::SEARCH_SELECTOR, translate,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_json::Value;

/// Runs update and link batches against one tracker.
///
/// Holds no per-batch state; every call builds and returns its own result.
pub struct BulkOrchestrator {
    tracker: Arc<dyn IssueTracker>,
    default_link_command: String,
}

impl BulkOrchestrator {
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self {
            tracker,
            default_link_command: DEFAULT_LINK_COMMAND.to_string(),
        }
    }

    /// Link phrase used for requests that do not carry one
    pub fn with_default_link_command<S: Into<String>>(mut self, command: S) -> Self {
        self.default_link_command = command.into();
        self
    }

    // =========================================================================
    // Update batch
    // =========================================================================

    /// Apply the same update to every issue in `issue_ids`, one at a time.
    ///
    /// Returns `Err` only for an empty id list, before any backend call. Ids are
    /// trimmed; a blank id is a per-item validation failure.
    pub async fn bulk_update(
        &self,
        issue_ids: &[String],
        update: &Value,
    ) -> Result<BulkUpdateResult> {
        if issue_ids.is_empty() {
            return Err(BulkError::validation("issueIds must be a non-empty list"));
        }

        info!("Starting bulk update of {} issues", issue_ids.len());

        let mut updated = Vec::new();
        let mut errors = Vec::new();

        for issue_id in issue_ids {
            match self.update_one(issue_id, update).await {
                Ok(success) => updated.push(success),
                Err(failure) => {
                    warn!(
                        "Update of {} failed ({:?}): {}",
                        issue_id, failure.kind, failure.error
                    );
                    errors.push(failure);
                }
            }
        }

        let result = BulkUpdateResult::new(updated, errors);
        info!(
            "Bulk update finished: {} total, {} successful, {} failed",
            result.summary.total, result.summary.successful, result.summary.failed
        );

        Ok(result)
    }

    async fn update_one(
        &self,
        issue_id: &str,
        update: &Value,
    ) -> std::result::Result<UpdateSuccess, UpdateFailure> {
        let raw_id = issue_id;
        let issue_id = issue_id.trim();
        if issue_id.is_empty() {
            return Err(UpdateFailure::new(
                raw_id,
                FailureKind::Validation,
                "issueId must be a non-empty string",
            ));
        }

        let translation = translate(update);

        self.write_update(issue_id, &translation)
            .await
            .map_err(|e| UpdateFailure::new(issue_id, FailureKind::Backend, e.message()))?;

        let Translation {
            commands,
            expectations,
            ..
        } = translation;

        if expectations.is_empty() {
            return Ok(UpdateSuccess {
                issue_id: issue_id.to_string(),
                commands,
                verified: false,
                applied_fields: None,
            });
        }

        match verify_fields(self.tracker.as_ref(), issue_id, &expectations).await {
            FieldVerification::Confirmed { applied_fields } => Ok(UpdateSuccess {
                issue_id: issue_id.to_string(),
                commands,
                verified: true,
                applied_fields: Some(applied_fields),
            }),
            FieldVerification::Mismatched { mismatches, .. } => {
                let fields = mismatches
                    .iter()
                    .map(|m| m.field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(UpdateFailure {
                    mismatches: Some(mismatches),
                    ..UpdateFailure::new(
                        issue_id,
                        FailureKind::VerificationMismatch,
                        format!("fields not applied: {}", fields),
                    )
                })
            }
            FieldVerification::Indeterminate { message } => Err(UpdateFailure::new(
                issue_id,
                FailureKind::VerificationIndeterminate,
                format!("could not verify update: {}", message),
            )),
        }
    }

    /// Patch first, then each command in order; stop at the first failure
    async fn write_update(&self, issue_id: &str, translation: &Translation) -> TrackerResult<()> {
        if translation.has_patch() {
            self.tracker
                .update_issue(issue_id, &translation.patch_payload)
                .await?;
        }

        for command in &translation.commands {
            apply_command(self.tracker.as_ref(), issue_id, command).await?;
        }

        Ok(())
    }

    // =========================================================================
    // Link batch
    // =========================================================================

    /// Create each requested link, one at a time.
    ///
    /// Returns `Err` only for an empty request list, before any backend call.
    pub async fn bulk_link(
        &self,
        requests: &[LinkRequest],
        options: LinkOptions,
    ) -> Result<BulkLinkResult> {
        if requests.is_empty() {
            return Err(BulkError::validation("links must be a non-empty list"));
        }

        info!(
            "Starting bulk link of {} requests (verify: {})",
            requests.len(),
            options.verify
        );

        let mut linked = Vec::new();
        let mut errors = Vec::new();

        for (index, request) in requests.iter().enumerate() {
            match self.link_one(index, request, options).await {
                Ok(success) => linked.push(success),
                Err(failure) => {
                    warn!(
                        "Link request #{} failed ({:?}): {}",
                        index, failure.kind, failure.error
                    );
                    errors.push(failure);
                }
            }
        }

        let result = BulkLinkResult::new(linked, errors);
        info!(
            "Bulk link finished: {} total, {} successful, {} failed",
            result.summary.total, result.summary.successful, result.summary.failed
        );

        Ok(result)
    }

    async fn link_one(
        &self,
        index: usize,
        request: &LinkRequest,
        options: LinkOptions,
    ) -> std::result::Result<LinkSuccess, LinkFailure> {
        let (source, target) = request.validated_ids().map_err(|e| LinkFailure {
            index,
            source_issue_id: request.source_issue_id.clone(),
            target_issue_id: request.target_issue_id.clone(),
            kind: FailureKind::Validation,
            error: e.message().to_string(),
        })?;

        let failure = |kind: FailureKind, error: String| LinkFailure {
            index,
            source_issue_id: Some(source.clone()),
            target_issue_id: Some(target.clone()),
            kind,
            error,
        };

        let resolution = resolve_readable_id(self.tracker.as_ref(), &target).await;
        let command = Command::link(
            request.link_command.as_deref(),
            &self.default_link_command,
            resolution.id(),
        );

        apply_command(self.tracker.as_ref(), &source, &command)
            .await
            .map_err(|e| failure(FailureKind::Backend, e.message()))?;

        if options.verify && !verify_link(self.tracker.as_ref(), &source, resolution.id()).await {
            return Err(failure(
                FailureKind::LinkNotVerified,
                format!(
                    "command '{}' was accepted but {} does not link to {}",
                    command,
                    source,
                    resolution.id()
                ),
            ));
        }

        Ok(LinkSuccess {
            index,
            source_issue_id: source.clone(),
            target_issue_id: resolution.id().to_string(),
            command,
            verified: options.verify,
            target_resolution: resolution.kind(),
        })
    }

    // =========================================================================
    // Ranking
    // =========================================================================

    /// Rank already-loaded items by criticality
    pub fn rank_by_criticality<T: Criticality>(
        &self,
        items: Vec<T>,
        now: DateTime<Utc>,
    ) -> Vec<Ranked<T>> {
        rank_by_criticality(items, now)
    }

    /// Search the tracker and rank the hits, keeping at most `top` of them
    pub async fn rank_search(
        &self,
        query: &str,
        top: usize,
        now: DateTime<Utc>,
    ) -> TrackerResult<Vec<Ranked<IssueSummary>>> {
        let issues = self
            .tracker
            .search_issues(query, SEARCH_SELECTOR, top)
            .await?;
        info!("Ranking {} issues matching '{}'", issues.len(), query);

        let mut ranked = rank_by_criticality(issues, now);
        ranked.truncate(top);
        Ok(ranked)
    }
}
