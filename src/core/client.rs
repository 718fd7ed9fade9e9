//! Outbound HubSpot API client.
//!
//! Every tool call funnels into [`HubSpotClient::execute`] with a
//! [`RequestPlan`] describing a single REST call. The client issues exactly
//! one HTTP request per plan: no retries, no pagination traversal, no
//! rate-limit backoff.
//!
//! The raw HTTP outcome is classified into [`ApiOutcome`], a tagged union the
//! rest of the crate can assert on. Flattening into the legacy text-only
//! response envelope happens at the tool boundary, not here.

use reqwest::{Client, Method, StatusCode, header};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::config::CredentialsConfig;

/// Fixed upstream origin for all HubSpot API calls.
pub const HUBSPOT_API_BASE: &str = "https://api.hubapi.com";

/// Errors raised by the client itself, before or during a request.
///
/// A non-2xx response from HubSpot is deliberately NOT an error here: it is
/// captured in [`ApiOutcome::Error`] so the tool layer can flatten it into
/// the response envelope.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No access token configured. Raised before any network I/O.
    #[error("HubSpot access token is not configured (set HUBSPOT_ACCESS_TOKEN)")]
    MissingToken,

    /// The HTTP request itself failed (connection refused, timeout, etc).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response carried a body that was not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Classified outcome of one HubSpot API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// 2xx with a JSON body, passed through without reshaping.
    Success(Value),

    /// HTTP 204; no body was read.
    NoContent,

    /// Any other status. `message` carries the upstream error body's
    /// `message` field when one could be parsed.
    Error { status: u16, message: Option<String> },
}

/// One outbound REST call: method, path, query string, and optional payload.
///
/// Query values are pre-stringified by the caller; array parameters are
/// comma-joined before they reach this layer. The JSON body (and with it the
/// `Content-Type` header) is only attached when present.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    form: Option<Vec<(String, String)>>,
    authenticated: bool,
}

impl RequestPlan {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            form: None,
            authenticated: true,
        }
    }

    /// Plan a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Plan a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Plan a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Plan a PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Plan a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt(self, key: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a form-urlencoded body (used by the OAuth token endpoint).
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.form = Some(pairs);
        self
    }

    /// Skip the bearer-auth requirement for this call.
    ///
    /// Only the OAuth token-refresh endpoint uses this: it authenticates with
    /// client credentials in the form body and exists precisely to obtain an
    /// access token.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// The HTTP method for this plan.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path (without the base origin).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters that will be encoded.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// The JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// HTTP client for the HubSpot REST API.
///
/// Holds the bearer token and the upstream base URL. Stateless otherwise;
/// safe to share across concurrent tool calls.
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HubSpotClient {
    /// Create a client from credentials, targeting the HubSpot production
    /// origin.
    pub fn new(credentials: &CredentialsConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: HUBSPOT_API_BASE.to_string(),
            access_token: credentials
                .access_token
                .clone()
                .filter(|t| !t.is_empty()),
        }
    }

    /// Override the upstream base URL (used by tests to target a stub
    /// backend).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether an access token is configured.
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Issue the single HTTP request described by `plan` and classify the
    /// response.
    ///
    /// Fails with [`ClientError::MissingToken`] before any network I/O when
    /// the plan requires auth and no token is configured.
    pub async fn execute(&self, plan: RequestPlan) -> Result<ApiOutcome, ClientError> {
        let url = format!("{}{}", self.base_url, plan.path);

        let mut request = self
            .http
            .request(plan.method.clone(), &url)
            .header(header::ACCEPT, "application/json");

        if plan.authenticated {
            let token = self.access_token.as_deref().ok_or(ClientError::MissingToken)?;
            request = request.bearer_auth(token);
        }

        if !plan.query.is_empty() {
            request = request.query(&plan.query);
        }

        if let Some(body) = &plan.body {
            request = request.json(body);
        }

        if let Some(form) = &plan.form {
            request = request.form(form);
        }

        debug!(method = %plan.method, path = %plan.path, "Calling HubSpot API");

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiOutcome::NoContent);
        }

        if !status.is_success() {
            // Surface the upstream error body's message when one exists.
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<Value>(&body).ok())
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));
            return Ok(ApiOutcome::Error {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            // A 2xx with no payload (not a 204) reads as null downstream.
            return Ok(ApiOutcome::Success(Value::Null));
        }

        Ok(ApiOutcome::Success(serde_json::from_str(&body)?))
    }
}
