use crate::{BulkSummary, LinkFailure, LinkSuccess};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkLinkResult {
    pub linked: Vec<LinkSuccess>,
    pub errors: Vec<LinkFailure>,
    pub summary: BulkSummary,
}

impl BulkLinkResult {
    pub fn new(linked: Vec<LinkSuccess>, errors: Vec<LinkFailure>) -> Self {
        let summary = BulkSummary::new(linked.len(), errors.len());
        Self {
            linked,
            errors,
            summary,
        }
    }
}
