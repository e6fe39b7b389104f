//! tb-client library
//!
//! HTTP implementation of the tracker backend seam.

pub(crate) mod client;
pub(crate) mod retry;
pub(crate) mod tracker;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use retry::{IsRetryable, RetryPolicy, with_retry};
