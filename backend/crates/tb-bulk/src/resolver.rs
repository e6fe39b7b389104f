use tb_core::{IssueTracker, is_internal_id, tracker::READABLE_ID_SELECTOR};

use log::warn;
use serde::Serialize;

/// Outcome of turning an identifier into its readable form.
///
/// Resolution is best-effort: `Fallback` keeps the original id so the caller
/// can proceed, while still telling it the id was not confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The id was not internal-shaped; nothing to do
    AlreadyReadable(String),
    /// The tracker confirmed the readable id for an internal id
    Resolved {
        internal_id: String,
        readable_id: String,
    },
    /// Lookup failed; the original id is used unchanged
    Fallback { original: String, reason: String },
}

/// Serializable tag for a [`Resolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    AlreadyReadable,
    Resolved,
    Fallback,
}

impl Resolution {
    /// The identifier to use from here on
    pub fn id(&self) -> &str {
        match self {
            Self::AlreadyReadable(id) => id,
            Self::Resolved { readable_id, .. } => readable_id,
            Self::Fallback { original, .. } => original,
        }
    }

    /// False only for `Fallback`
    pub fn is_confirmed(&self) -> bool {
        !matches!(self, Self::Fallback { .. })
    }

    pub fn kind(&self) -> ResolutionKind {
        match self {
            Self::AlreadyReadable(_) => ResolutionKind::AlreadyReadable,
            Self::Resolved { .. } => ResolutionKind::Resolved,
            Self::Fallback { .. } => ResolutionKind::Fallback,
        }
    }
}

/// Resolve an internal id (`3-42`) to its readable form (`PROJ-42`).
///
/// Never fails: network errors, unknown issues and responses without a
/// readable id all yield `Fallback`.
pub async fn resolve_readable_id(tracker: &dyn IssueTracker, issue_id: &str) -> Resolution {
    if !is_internal_id(issue_id) {
        return Resolution::AlreadyReadable(issue_id.to_string());
    }

    let reason = match tracker.fetch_issue(issue_id, READABLE_ID_SELECTOR).await {
        Ok(snapshot) => match snapshot.id_readable.as_deref().map(str::trim) {
            Some(readable) if !readable.is_empty() => {
                return Resolution::Resolved {
                    internal_id: issue_id.to_string(),
                    readable_id: readable.to_string(),
                };
            }
            _ => "response carried no idReadable".to_string(),
        },
        Err(e) => e.message(),
    };

    warn!(
        "Could not resolve readable id for {}, using it as is: {}",
        issue_id, reason
    );

    Resolution::Fallback {
        original: issue_id.to_string(),
        reason,
    }
}
