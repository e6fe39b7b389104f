//! Bulk issue mutation and verification.
//!
//! Items are processed strictly one after another so each item's writes are
//! visible to its own read-back, and a failing item never stops the batch.

pub mod error;
pub mod executor;
pub mod link_options;
pub mod orchestrator;
pub mod resolver;
pub mod results;
pub mod verification;

pub use error::{BulkError, Result};
pub use executor::apply_command;
pub use link_options::LinkOptions;
pub use orchestrator::BulkOrchestrator;
pub use resolver::{Resolution, ResolutionKind, resolve_readable_id};
pub use results::{
    bulk_link_result::BulkLinkResult, bulk_summary::BulkSummary,
    bulk_update_result::BulkUpdateResult, failure_kind::FailureKind, link_failure::LinkFailure,
    link_success::LinkSuccess, update_failure::UpdateFailure, update_success::UpdateSuccess,
};
pub use verification::field_verification::FieldVerification;
pub use verification::verifier::{verify_fields, verify_link};

#[cfg(test)]
mod tests;
