//! Get team by ID tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::require_segment;
use crate::state::{AppState, TeamOutput};

/// Input for looking up a team by ID
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTeamInput {
    /// Team ID as assigned by Mattermost (e.g. "ij3aeng7ao8hee3ya8gaihaove")
    #[serde(alias = "id")]
    team_id: String,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_team")
        .description(
            "Get a single Mattermost team by its ID. \
             Returns the team object exactly as the server reports it.",
        )
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<GetTeamInput>| async move {
                require_segment("team_id", &input.team_id)
                    .map_err(|e| e.failure())
                    .tool_context("Invalid arguments")?;
                tracing::debug!(team_id = %input.team_id, "get_team");
                let team = state
                    .client
                    .get_team(&input.team_id)
                    .await
                    .map_err(|e| e.failure())
                    .tool_context("Mattermost API error")?;

                let output = serde_json::to_string_pretty(&TeamOutput::new(team))
                    .tool_context("Failed to encode team")?;
                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
