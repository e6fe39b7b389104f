pub mod bulk_link_result;
pub mod bulk_summary;
pub mod bulk_update_result;
pub mod failure_kind;
pub mod link_failure;
pub mod link_success;
pub mod update_failure;
pub mod update_success;
