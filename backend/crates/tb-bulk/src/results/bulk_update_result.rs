use crate::{BulkSummary, UpdateFailure, UpdateSuccess};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResult {
    pub updated: Vec<UpdateSuccess>,
    pub errors: Vec<UpdateFailure>,
    pub summary: BulkSummary,
}

impl BulkUpdateResult {
    pub fn new(updated: Vec<UpdateSuccess>, errors: Vec<UpdateFailure>) -> Self {
        let summary = BulkSummary::new(updated.len(), errors.len());
        Self {
            updated,
            errors,
            summary,
        }
    }
}
