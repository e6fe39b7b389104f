use tb_core::FieldMismatch;

use std::collections::BTreeMap;

/// Result of comparing read-back field values against expectations.
///
/// `Indeterminate` means the read-back itself failed, so nothing is known
/// about the fields; it is never reported as a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVerification {
    /// Every expected field matched
    Confirmed {
        applied_fields: BTreeMap<String, String>,
    },
    /// At least one field read back differently
    Mismatched {
        mismatches: Vec<FieldMismatch>,
        applied_fields: BTreeMap<String, String>,
    },
    /// The issue could not be read back
    Indeterminate { message: String },
}

impl FieldVerification {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn mismatches(&self) -> &[FieldMismatch] {
        match self {
            Self::Mismatched { mismatches, .. } => mismatches,
            _ => &[],
        }
    }
}
