use serde::Serialize;

/// Why a single batch item failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rejected locally; nothing was sent
    Validation,
    /// The tracker refused or could not be reached
    Backend,
    /// Writes were accepted but some fields read back differently
    VerificationMismatch,
    /// Writes were accepted but the issue could not be read back
    VerificationIndeterminate,
    /// The link command was accepted but the link is not visible
    LinkNotVerified,
}
