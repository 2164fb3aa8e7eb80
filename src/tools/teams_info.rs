//! Gather team information tool
//!
//! Looks up one team by ID or name, or lists all teams when neither is given.
//! The result is always a list.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::{Error, MattermostClient, Team};
use crate::state::{AppState, TeamsOutput};

/// Input for gathering team information
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct TeamsInfoInput {
    /// Team ID as assigned by Mattermost. Mutually exclusive with `team_name`.
    #[serde(default, alias = "id")]
    pub team_id: Option<String>,
    /// Team name (URL slug). Mutually exclusive with `team_id`.
    #[serde(default, alias = "name")]
    pub team_name: Option<String>,
}

/// Which teams a `teams_info` call asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelector {
    Id(String),
    Name(String),
    All,
}

impl TeamsInfoInput {
    /// Resolve the input into a selector. Blank strings count as absent.
    pub fn selector(&self) -> Result<TeamSelector, Error> {
        let id = self.team_id.as_deref().filter(|s| !s.trim().is_empty());
        let name = self.team_name.as_deref().filter(|s| !s.trim().is_empty());
        match (id, name) {
            (Some(_), Some(_)) => Err(Error::InvalidArguments(
                "parameters are mutually exclusive: team_id|team_name".into(),
            )),
            (Some(id), None) => Ok(TeamSelector::Id(id.to_string())),
            (None, Some(name)) => Ok(TeamSelector::Name(name.to_string())),
            (None, None) => Ok(TeamSelector::All),
        }
    }
}

impl TeamSelector {
    pub async fn fetch(&self, client: &MattermostClient) -> Result<Vec<Team>, Error> {
        match self {
            TeamSelector::Id(id) => Ok(vec![client.get_team(id).await?]),
            TeamSelector::Name(name) => Ok(vec![client.get_team_by_name(name).await?]),
            TeamSelector::All => client.get_all_teams().await,
        }
    }
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("teams_info")
        .description(
            "Gather information about Mattermost teams. Pass team_id or team_name \
             (not both) for a single team, or neither to list every team. \
             Always returns {\"changed\": false, \"teams\": [...]}.",
        )
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<TeamsInfoInput>| async move {
                let selector = input
                    .selector()
                    .map_err(|e| e.failure())
                    .tool_context("Invalid arguments")?;
                tracing::debug!(?selector, "teams_info");

                let teams = selector
                    .fetch(&state.client)
                    .await
                    .map_err(|e| e.failure())
                    .tool_context("Mattermost API error")?;

                let output = serde_json::to_string_pretty(&TeamsOutput::new(teams))
                    .tool_context("Failed to encode teams")?;
                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
