use crate::{CliClientResult, ClientError, RetryPolicy, with_retry};

use tb_config::{RetryConfig, TrackerConfig};
use tb_core::CommandRequest;

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, Url, header};
use serde::Serialize;
use serde_json::Value;

/// Fields requested back after a partial update
const UPDATE_RESPONSE_FIELDS: &str = "id,idReadable";

/// HTTP client for the tracker REST API
pub struct Client {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
    retry: RetryPolicy,
}

impl Client {
    /// Create a new client with default timeouts and retry policy
    ///
    /// # Arguments
    /// * `base_url` - Tracker URL (e.g., "https://tracker.example.com")
    /// * `token` - Optional permanent token, sent as a bearer credential
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
            retry: RetryPolicy::default(),
        }
    }

    /// Create a client from validated configuration
    pub fn from_config(tracker: &TrackerConfig, retry: &RetryConfig) -> CliClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(tracker.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: tracker.base_url.trim().trim_end_matches('/').to_string(),
            token: tracker.token.clone(),
            client,
            retry: RetryPolicy::from(retry),
        })
    }

    /// Replace the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build `{base_url}/{segments...}?{query}` with each segment percent-encoded
    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> CliClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::url_error(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::url_error(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Build a request with auth and accept headers
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send once and interpret the response
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> CliClientResult<Value> {
        log::debug!("{} {}", method, url.path());

        let mut req = self.request(method, url.clone());
        if let Some(body) = body {
            req = req.json(body);
        }

        self.execute(req).await
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = Self::error_message(&text)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Pull a human-readable message out of an error body.
    ///
    /// Understands `{"error": "...", "error_description": "..."}` and
    /// `{"error": {"message": "..."}}`.
    fn error_message(text: &str) -> Option<String> {
        let body: Value = serde_json::from_str(text).ok()?;

        let description = body.get("error_description").and_then(Value::as_str);
        let error = body.get("error");
        let nested = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str);

        description
            .or(nested)
            .or_else(|| error.and_then(Value::as_str))
            .map(String::from)
    }

    // =========================================================================
    // Issue Operations
    // =========================================================================

    /// Partially update an issue's plain fields
    pub async fn post_issue_fields(&self, issue_id: &str, fields: &Value) -> CliClientResult<Value> {
        let url = self.url(
            &["api", "issues", issue_id],
            &[("fields", UPDATE_RESPONSE_FIELDS)],
        )?;
        with_retry(&self.retry, "update issue", || {
            self.send(Method::POST, &url, Some(fields))
        })
        .await
    }

    /// Get an issue limited to the given field selector
    pub async fn get_issue(&self, issue_id: &str, fields: &str) -> CliClientResult<Value> {
        let url = self.url(&["api", "issues", issue_id], &[("fields", fields)])?;
        with_retry(&self.retry, "fetch issue", || {
            self.send::<Value>(Method::GET, &url, None)
        })
        .await
    }

    /// Search issues with a tracker query
    pub async fn list_issues(&self, query: &str, fields: &str, top: usize) -> CliClientResult<Value> {
        let top = top.to_string();
        let url = self.url(
            &["api", "issues"],
            &[("query", query), ("fields", fields), ("$top", top.as_str())],
        )?;
        with_retry(&self.retry, "search issues", || {
            self.send::<Value>(Method::GET, &url, None)
        })
        .await
    }

    // =========================================================================
    // Command Operations
    // =========================================================================

    /// Submit a command against the referenced issues
    pub async fn post_command(&self, request: &CommandRequest) -> CliClientResult<Value> {
        let url = self.url(&["api", "commands"], &[])?;
        with_retry(&self.retry, "apply command", || {
            self.send(Method::POST, &url, Some(request))
        })
        .await
    }
}
