pub mod command;
pub mod command_request;
pub mod expectations;
pub mod field_mismatch;
pub mod field_value;
pub mod issue_ref;
pub mod issue_snapshot;
pub mod issue_summary;
pub mod link_request;
