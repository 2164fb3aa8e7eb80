//! Shared application state

use serde::Serialize;

use crate::client::{Error, MattermostClient, Team};
use crate::config::ConnectionConfig;

/// Shared state for the MCP server
pub struct AppState {
    /// Mattermost API client bound to one server and token
    pub client: MattermostClient,
}

impl AppState {
    /// Create new application state from a connection configuration.
    ///
    /// The configuration is validated here, before any request is sent.
    pub fn new(config: &ConnectionConfig) -> Result<Self, Error> {
        Ok(Self {
            client: config.build_client()?,
        })
    }

    /// Create state for a test server with a fixed token.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(&ConnectionConfig::new(base_url, "test-token"))
    }
}

/// Success payload for single-team lookups.
#[derive(Debug, Serialize)]
pub struct TeamOutput {
    pub changed: bool,
    pub team: Team,
}

impl TeamOutput {
    pub fn new(team: Team) -> Self {
        Self {
            changed: false,
            team,
        }
    }
}

/// Success payload for listings.
#[derive(Debug, Serialize)]
pub struct TeamsOutput {
    pub changed: bool,
    pub teams: Vec<Team>,
}

impl TeamsOutput {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            changed: false,
            teams,
        }
    }
}
