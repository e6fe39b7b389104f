use crate::FieldVerification;

use tb_core::{
    Expectations, FieldMismatch, IssueTracker,
    tracker::{VERIFY_FIELDS_SELECTOR, VERIFY_LINKS_SELECTOR},
};

use std::collections::BTreeMap;

use log::{debug, warn};

/// Re-fetch an issue and compare each expected field with what the tracker
/// now reports. Only fields named in `expectations` are looked at.
pub async fn verify_fields(
    tracker: &dyn IssueTracker,
    issue_id: &str,
    expectations: &Expectations,
) -> FieldVerification {
    let snapshot = match tracker.fetch_issue(issue_id, VERIFY_FIELDS_SELECTOR).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Could not read back {} for verification: {}", issue_id, e);
            return FieldVerification::Indeterminate {
                message: e.message(),
            };
        }
    };

    let mut applied_fields = BTreeMap::new();
    let mut mismatches = Vec::new();

    for (field, expected) in expectations.iter() {
        let actual = snapshot
            .custom_field(field)
            .and_then(|custom_field| custom_field.resolved_value());

        match actual {
            Some(actual) if actual == expected => {
                applied_fields.insert(field.to_string(), actual);
            }
            actual => mismatches.push(FieldMismatch {
                field: field.to_string(),
                expected: expected.to_string(),
                actual,
            }),
        }
    }

    debug!(
        "Verified {}: {} applied, {} mismatched",
        issue_id,
        applied_fields.len(),
        mismatches.len()
    );

    if mismatches.is_empty() {
        FieldVerification::Confirmed { applied_fields }
    } else {
        FieldVerification::Mismatched {
            mismatches,
            applied_fields,
        }
    }
}

/// True if `source_id` now links to `target_id` (matched by readable or
/// internal id). A failed read-back counts as not linked.
pub async fn verify_link(tracker: &dyn IssueTracker, source_id: &str, target_id: &str) -> bool {
    match tracker.fetch_issue(source_id, VERIFY_LINKS_SELECTOR).await {
        Ok(snapshot) => snapshot.has_link_to(target_id),
        Err(e) => {
            warn!("Could not read back links of {}: {}", source_id, e);
            false
        }
    }
}
