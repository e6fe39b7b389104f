use crate::{Criticality, CustomFieldSnapshot};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the custom field carrying an issue's priority
pub const PRIORITY_FIELD: &str = "Priority";

/// Issue row returned by a search, enough to rank by criticality
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub id_readable: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldSnapshot>,
}

impl IssueSummary {
    pub fn priority(&self) -> Option<String> {
        self.custom_fields
            .iter()
            .find(|field| field.name.as_deref() == Some(PRIORITY_FIELD))
            .and_then(CustomFieldSnapshot::resolved_value)
    }
}

impl Criticality for IssueSummary {
    fn priority_label(&self) -> Option<String> {
        self.priority()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
