//! Connection configuration, validated before any client is built.

use std::time::Duration;

use url::Url;

use crate::client::{ClientOptions, Connection, Error, MattermostClient};

/// Caller-supplied settings for one Mattermost server.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Absolute base URL of the server (e.g. `https://chat.example.com`).
    pub url: String,
    /// Personal access token or bot token.
    pub token: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ConnectionConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            timeout: None,
            user_agent: ClientOptions::default().user_agent,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check the URL and token and produce an immutable [`Connection`].
    pub fn validate(&self) -> Result<Connection, Error> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(Error::Config("token must not be empty".into()));
        }

        let base_url = Url::parse(self.url.trim())
            .map_err(|e| Error::Config(format!("url {:?} is not a valid URL: {e}", self.url)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "url scheme must be http or https, got {:?}",
                base_url.scheme()
            )));
        }
        if base_url.host_str().is_none() {
            return Err(Error::Config(format!("url {:?} has no host", self.url)));
        }

        Ok(Connection::new(base_url, token))
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
        }
    }

    /// Validate and build a ready-to-use client.
    pub fn build_client(&self) -> Result<MattermostClient, Error> {
        MattermostClient::with_options(self.validate()?, &self.client_options())
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
