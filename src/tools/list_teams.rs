//! List all teams tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::state::{AppState, TeamsOutput};

/// Input for listing teams (no parameters)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListTeamsInput {}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("list_teams")
        .description(
            "List every Mattermost team visible to the token, following pagination \
             until the server's reported total is reached. Fails as a whole if any page fails.",
        )
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(_input): Json<ListTeamsInput>| async move {
                let teams = state
                    .client
                    .get_all_teams()
                    .await
                    .map_err(|e| e.failure())
                    .tool_context("Mattermost API error")?;
                tracing::info!(count = teams.len(), "Listed teams");

                let output = serde_json::to_string_pretty(&TeamsOutput::new(teams))
                    .tool_context("Failed to encode teams")?;
                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
