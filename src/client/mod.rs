//! Mattermost API client
//!
//! Async client for the Mattermost REST API (v4), built on reqwest.
//! Every request carries the connection's bearer token, and every response
//! is classified by status into success, client error, server error or
//! unhandled error.

pub mod error;
pub mod types;
pub(crate) mod wire;

mod teams;


use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

pub use error::{Error, Failure};
pub use teams::TEAMS_PER_PAGE;
pub(crate) use teams::require_segment;
pub use types::Team;

use wire::ApiErrorBody;

// ── Connection ──────────────────────────────────────────────────────────────

/// Base URL and bearer credential for one Mattermost server.
///
/// Immutable once built; usually produced by
/// [`ConnectionConfig::validate`](crate::config::ConnectionConfig::validate).
#[derive(Clone)]
pub struct Connection {
    base_url: Url,
    access_token: String,
}

impl Connection {
    pub fn new(base_url: Url, access_token: impl Into<String>) -> Self {
        Self {
            base_url,
            access_token: access_token.into(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// Transport policy for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub user_agent: String,
    /// Total per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("mattermost-teams-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

// ── Client ──────────────────────────────────────────────────────────────────

/// Async client for the Mattermost REST API.
///
/// Issues exactly one round trip per call and never retries.
pub struct MattermostClient {
    http: reqwest::Client,
    connection: Connection,
}

impl MattermostClient {
    /// Create a client with default options.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        Self::with_options(connection, &ClientOptions::default())
    }

    /// Create a client with an explicit user agent and timeout policy.
    pub fn with_options(connection: Connection, options: &ClientOptions) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(&options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            connection,
        })
    }

    /// Send an authenticated request and classify the response.
    ///
    /// `path` is resolved against the base URL with RFC 3986 reference
    /// resolution, so a base without a trailing slash has its last path
    /// segment replaced (`https://host/chat` + `api/v4/teams` becomes
    /// `https://host/api/v4/teams`).
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value, Error> {
        let url = self.connection.base_url.join(path)?;
        tracing::debug!(%method, %url, "Sending Mattermost API request");

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(&self.connection.access_token);
        if let Some(query) = query {
            request = request.query(query);
        }

        let resp = request.send().await?;
        Self::classify(resp).await
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, Error> {
        self.execute(Method::GET, path, None).await
    }

    /// GET a JSON resource with query parameters.
    pub(crate) async fn get_json_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, Error> {
        self.execute(Method::GET, path, Some(query)).await
    }

    /// Map the response status to a parsed body or a classified error.
    async fn classify(resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        let status_code = status.as_u16();
        let status_reason = status.canonical_reason().unwrap_or_default().to_string();
        tracing::debug!(status_code, %status_reason, "Received Mattermost API response");

        if status.is_success() {
            let body = resp.bytes().await?;
            if body.is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_slice(&body)?)
        } else if status.is_client_error() {
            let text = resp.text().await?;
            Err(Error::Client {
                message: client_error_message(&text, status),
                status_reason,
                status_code,
            })
        } else if status.is_server_error() {
            Err(Error::Server {
                status_reason,
                status_code,
            })
        } else {
            Err(Error::Unhandled)
        }
    }
}

/// Prefer the body's `message` field, then the raw body, then the reason phrase.
fn client_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("client error")
        .to_string()
}
