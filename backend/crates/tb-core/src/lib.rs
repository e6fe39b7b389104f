pub mod criticality;
pub mod error;
pub mod models;
pub mod tracker;
pub mod translate;

pub use criticality::criticality_input::CriticalityInput;
pub use criticality::ranked::Ranked;
pub use criticality::scorer::{Criticality, priority_weight, rank_by_criticality, score};
pub use error::{CoreError, Result, TrackerError, TrackerResult};
pub use models::command::{Command, quote_value};
pub use models::command_request::CommandRequest;
pub use models::expectations::Expectations;
pub use models::field_mismatch::FieldMismatch;
pub use models::field_value::{actual_field_value, expected_field_value};
pub use models::issue_ref::{IssueRef, is_internal_id};
pub use models::issue_snapshot::{CustomFieldSnapshot, IssueLink, IssueSnapshot, LinkType, LinkedIssue};
pub use models::issue_summary::IssueSummary;
pub use models::link_request::LinkRequest;
pub use tracker::IssueTracker;
pub use translate::shorthand_field::{SHORTHAND_FIELDS, ShorthandField};
pub use translate::translation::Translation;
pub use translate::translator::translate;

/// Key of the custom field list inside an update payload.
pub const CUSTOM_FIELDS_KEY: &str = "customFields";
/// Link phrase used when a link request does not name one.
pub const DEFAULT_LINK_COMMAND: &str = "relates to";

#[cfg(test)]
mod tests;
