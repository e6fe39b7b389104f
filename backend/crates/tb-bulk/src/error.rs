use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Batch-level failure. Only raised before any backend call is made;
/// per-item problems are reported inside the batch result instead.
#[derive(Error, Debug)]
pub enum BulkError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl BulkError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        BulkError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, BulkError>;
