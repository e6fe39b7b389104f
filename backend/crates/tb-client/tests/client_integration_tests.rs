//! Integration tests for the tracker client using wiremock mock server

use tb_client::{Client, RetryPolicy};
use tb_core::{Command, CommandRequest, IssueTracker, TrackerError};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

#[tokio::test]
async fn test_update_issue_posts_patch_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/issues/PROJ-7"))
        .and(query_param("fields", "id,idReadable"))
        .and(header("authorization", "Bearer perm:abc"))
        .and(body_json(json!({"summary": "New title"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "3-7",
            "idReadable": "PROJ-7",
            "$type": "Issue"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("perm:abc"));
    let result = client
        .update_issue("PROJ-7", &json!({"summary": "New title"}))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_apply_command_internal_id_reference() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/commands"))
        .and(body_json(json!({
            "query": "Priority Critical",
            "issues": [{"id": "3-42"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let request = CommandRequest::single("3-42", &Command::new("Priority Critical"));

    client.apply_command(&request).await.unwrap();
}

#[tokio::test]
async fn test_apply_command_readable_id_reference_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/commands"))
        .and(body_json(json!({
            "query": "relates to PROJ-2",
            "issues": [{"idReadable": "PROJ-7"}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let request = CommandRequest::single("PROJ-7", &Command::new("relates to PROJ-2"));

    client.apply_command(&request).await.unwrap();
}

#[tokio::test]
async fn test_apply_command_rejected_surfaces_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/commands"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "bad_request",
            "error_description": "Unknown command: Priorty"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None).with_retry_policy(fast_retry(3));
    let request = CommandRequest::single("PROJ-7", &Command::new("Priorty Critical"));

    let err = client.apply_command(&request).await.unwrap_err();

    assert!(matches!(err, TrackerError::Api { status: 400, .. }));
    assert!(err.message().contains("Unknown command"));
}

#[tokio::test]
async fn test_fetch_issue_decodes_custom_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues/PROJ-7"))
        .and(query_param("fields", "customFields(name,value(name,id,login))"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customFields": [
                {"name": "Priority", "value": {"name": "Critical", "$type": "EnumBundleElement"}, "$type": "SingleEnumIssueCustomField"},
                {"name": "Assignee", "value": null}
            ],
            "$type": "Issue"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let snapshot = client
        .fetch_issue("PROJ-7", "customFields(name,value(name,id,login))")
        .await
        .unwrap();

    let priority = snapshot.custom_field("Priority").unwrap();
    assert_eq!(priority.resolved_value().as_deref(), Some("Critical"));
    assert_eq!(snapshot.custom_field("Assignee").unwrap().resolved_value(), None);
}

#[tokio::test]
async fn test_fetch_issue_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues/9-9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Not Found",
            "error_description": "Entity with id 9-9 not found"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.fetch_issue("9-9", "idReadable").await.unwrap_err();

    assert!(matches!(err, TrackerError::Api { status: 404, .. }));
    assert!(err.to_string().contains("Entity with id 9-9 not found"));
}

#[tokio::test]
async fn test_fetch_issue_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues/3-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"idReadable": 17})))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.fetch_issue("3-1", "idReadable").await.unwrap_err();

    assert!(matches!(err, TrackerError::Decode { .. }));
}

#[tokio::test]
async fn test_search_issues_passes_query_and_top() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues"))
        .and(query_param("query", "project: PROJ #Unresolved"))
        .and(query_param("$top", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "idReadable": "PROJ-1",
                "summary": "Crash on start",
                "created": 1704067200000i64,
                "customFields": [{"name": "Priority", "value": {"name": "Critical"}}]
            },
            {"idReadable": "PROJ-2", "summary": "Typo"}
        ])))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let issues = client
        .search_issues("project: PROJ #Unresolved", "idReadable,summary", 25)
        .await
        .unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].priority().as_deref(), Some("Critical"));
    assert_eq!(issues[1].priority(), None);
}

#[tokio::test]
async fn test_server_error_retried_until_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues/3-42"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/issues/3-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"idReadable": "PROJ-42"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None).with_retry_policy(fast_retry(3));
    let snapshot = client.fetch_issue("3-42", "idReadable").await.unwrap();

    assert_eq!(snapshot.id_readable.as_deref(), Some("PROJ-42"));
}

#[tokio::test]
async fn test_client_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/issues/PROJ-1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Forbidden",
            "error_description": "You have no permission to update the issue"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None).with_retry_policy(fast_retry(3));
    let err = client
        .update_issue("PROJ-1", &json!({"summary": "x"}))
        .await
        .unwrap_err();

    assert!(matches!(err, TrackerError::Api { status: 403, .. }));
}
