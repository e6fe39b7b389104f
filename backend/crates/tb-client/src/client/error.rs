use error_location::ErrorLocation;
use std::panic::Location;
use tb_core::TrackerError;
use thiserror::Error;

/// Errors that can occur during tracker API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid tracker URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a URL error with location
    #[track_caller]
    pub fn url_error<S: Into<String>>(message: S) -> Self {
        ClientError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Connection problems, timeouts, throttling and 5xx responses
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Http { source, .. } => !source.is_builder() && !source.is_decode(),
            ClientError::Api { status, .. } => *status == 429 || (500..600).contains(status),
            ClientError::Json { .. } | ClientError::Url { .. } => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for TrackerError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http { message, .. } | ClientError::Url { message, .. } => {
                TrackerError::request(message)
            }
            ClientError::Api {
                status, message, ..
            } => TrackerError::api(status, message),
            ClientError::Json { message, .. } => TrackerError::decode(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
