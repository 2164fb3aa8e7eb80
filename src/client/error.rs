//! Error types for the Mattermost API client.

use serde::Serialize;

/// Message reported for every 5xx response. The server's own body is not exposed.
pub const SERVER_ERROR_MESSAGE: &str = "Unexpected server side error.";

/// Message reported for statuses outside 2xx/4xx/5xx.
pub const UNHANDLED_ERROR_MESSAGE: &str = "Unhandled error.";

/// Errors returned by the Mattermost API client.
///
/// `Client`, `Server` and `Unhandled` are classified from the response status.
/// `Http` is a transport failure and is never folded into those three.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 4xx response. The message comes from the response body.
    #[error("{message} ({status_code} {status_reason})")]
    Client {
        message: String,
        status_reason: String,
        status_code: u16,
    },

    /// 5xx response.
    #[error("Unexpected server side error. ({status_code} {status_reason})")]
    Server {
        status_reason: String,
        status_code: u16,
    },

    /// Any status that is neither 2xx, 4xx nor 5xx.
    #[error("Unhandled error.")]
    Unhandled,

    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request path could not be resolved against the base URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Connection configuration rejected at the boundary.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Caller passed a combination of parameters that cannot be served.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl Error {
    /// Human-readable failure message.
    pub fn message(&self) -> String {
        match self {
            Error::Client { message, .. } => message.clone(),
            Error::Server { .. } => SERVER_ERROR_MESSAGE.to_string(),
            Error::Unhandled => UNHANDLED_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// HTTP reason phrase, for client and server errors only.
    pub fn status_reason(&self) -> Option<&str> {
        match self {
            Error::Client { status_reason, .. } | Error::Server { status_reason, .. } => {
                Some(status_reason)
            }
            _ => None,
        }
    }

    /// HTTP status code, for client and server errors only.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Client { status_code, .. } | Error::Server { status_code, .. } => {
                Some(*status_code)
            }
            _ => None,
        }
    }

    /// True for failures that never reached a classifiable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Build the failure payload reported to callers.
    pub fn failure(&self) -> Failure {
        Failure {
            msg: self.message(),
            status: self.status_reason().map(str::to_string),
            status_code: self.status_code(),
        }
    }
}

/// Failure payload surfaced to the caller: `{msg, status, status_code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Renders as the JSON payload so tool errors carry it verbatim.
impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for Failure {}
