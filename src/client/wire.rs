//! Internal wire types for serde deserialization.
//!
//! These types match the raw JSON structure from the Mattermost API
//! and are not exposed publicly.

use serde::Deserialize;

use super::types::Team;

/// One page of `GET api/v4/teams?include_total_count=true`.
#[derive(Deserialize)]
pub(crate) struct TeamsPage {
    pub teams: Vec<Team>,
    /// Signed so a bogus negative total ends the listing instead of failing it.
    pub total_count: i64,
}

/// Error body sent with 4xx responses. Other fields are ignored.
#[derive(Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
