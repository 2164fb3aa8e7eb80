//! Get team by name tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::require_segment;
use crate::state::{AppState, TeamOutput};

/// Input for looking up a team by name
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTeamByNameInput {
    /// Team name (URL slug), used verbatim in the request path
    #[serde(alias = "name")]
    team_name: String,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_team_by_name")
        .description(
            "Get a single Mattermost team by its name (the URL slug, e.g. \"acme-squad\"). \
             The name is not re-encoded; escape special characters yourself.",
        )
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<GetTeamByNameInput>| async move {
                require_segment("team_name", &input.team_name)
                    .map_err(|e| e.failure())
                    .tool_context("Invalid arguments")?;
                tracing::debug!(team_name = %input.team_name, "get_team_by_name");
                let team = state
                    .client
                    .get_team_by_name(&input.team_name)
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
