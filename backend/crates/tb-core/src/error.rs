use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the source location, suitable for per-item reports
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

/// Failure of a single call against the issue tracker backend
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Tracker request failed: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("Tracker API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Tracker response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl TrackerError {
    #[track_caller]
    pub fn request<S: Into<String>>(message: S) -> Self {
        TrackerError::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        TrackerError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        TrackerError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the source location, suitable for per-item reports
    pub fn message(&self) -> String {
        match self {
            TrackerError::Request { message, .. } => message.clone(),
            TrackerError::Api {
                status, message, ..
            } => format!("{} (status: {})", message, status),
            TrackerError::Decode { message, .. } => message.clone(),
        }
    }
}

pub type TrackerResult<T> = StdResult<T, TrackerError>;
