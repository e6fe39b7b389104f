use serde::Serialize;

/// Item counts for a finished batch; `successful + failed == total`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl BulkSummary {
    pub fn new(successful: usize, failed: usize) -> Self {
        Self {
            total: successful + failed,
            successful,
            failed,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
