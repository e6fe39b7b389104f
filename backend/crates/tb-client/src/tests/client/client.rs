use crate::{Client, ClientError};

use tb_config::{RetryConfig, TrackerConfig};
use tb_core::TrackerError;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8080/", None);
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8080", None);
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8080", Some("perm:abc"));
    assert!(client.has_token());
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:8080", None);
    assert!(!client.has_token());
}

#[test]
fn test_from_config_trims_base_url() {
    let tracker = TrackerConfig {
        base_url: " https://tracker.example.com/youtrack/ ".to_string(),
        token: Some("perm:abc".to_string()),
        timeout_secs: 5,
    };

    let client = Client::from_config(&tracker, &RetryConfig::default()).unwrap();

    assert_eq!(client.base_url, "https://tracker.example.com/youtrack");
    assert!(client.has_token());
}

#[test]
fn test_api_error_retryability() {
    assert!(ClientError::api_error(503, "unavailable".into()).is_retryable());
    assert!(ClientError::api_error(429, "slow down".into()).is_retryable());
    assert!(!ClientError::api_error(404, "missing".into()).is_retryable());
    assert!(!ClientError::url_error("bad").is_retryable());
}

#[test]
fn test_client_error_maps_to_tracker_error() {
    let err: TrackerError = ClientError::api_error(404, "Issue not found".into()).into();
    assert!(matches!(err, TrackerError::Api { status: 404, .. }));
    assert_eq!(err.message(), "Issue not found (status: 404)");

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TrackerError = ClientError::from_json(json_err).into();
    assert!(matches!(err, TrackerError::Decode { .. }));
}
