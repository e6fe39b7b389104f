use serde::{Deserialize, Serialize};

/// Reference to a single issue as the command endpoint expects it.
///
/// Serializes as `{"id": "3-42"}` for internal ids and
/// `{"idReadable": "PROJ-7"}` for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueRef {
    #[serde(rename = "id")]
    Internal(String),
    #[serde(rename = "idReadable")]
    Readable(String),
}

impl IssueRef {
    /// Classify an identifier by its shape
    pub fn classify(issue_id: &str) -> Self {
        if is_internal_id(issue_id) {
            Self::Internal(issue_id.to_string())
        } else {
            Self::Readable(issue_id.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal(id) | Self::Readable(id) => id,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl std::fmt::Display for IssueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True when `s` is exactly `<digits>-<digits>`, e.g. `3-42`.
pub fn is_internal_id(s: &str) -> bool {
    let Some((entity, sequence)) = s.split_once('-') else {
        return false;
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(entity) && all_digits(sequence)
}
