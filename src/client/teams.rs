//! Team-related API endpoints.

use super::MattermostClient;
use super::error::Error;
use super::types::Team;
use super::wire::TeamsPage;

/// Page size used when listing all teams.
pub const TEAMS_PER_PAGE: u64 = 60;

const TEAMS_PATH: &str = "api/v4/teams";

impl MattermostClient {
    /// Get a team by its server-assigned ID.
    pub async fn get_team(&self, team_id: &str) -> Result<Team, Error> {
        require_segment("team_id", team_id)?;
        let value = self.get_json(&format!("{TEAMS_PATH}/{team_id}")).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get a team by its name. The name is placed in the path verbatim.
    pub async fn get_team_by_name(&self, name: &str) -> Result<Team, Error> {
        require_segment("team_name", name)?;
        let value = self.get_json(&format!("{TEAMS_PATH}/name/{name}")).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get every team, following pagination.
    ///
    /// The total is taken from the first page only. Any failing page aborts
    /// the whole listing and nothing fetched so far is returned.
    pub async fn get_all_teams(&self) -> Result<Vec<Team>, Error> {
        let mut page = 0;
        let first = self.teams_page(page).await?;
        let total_count = u64::try_from(first.total_count).unwrap_or(0);
        let mut fetched = TEAMS_PER_PAGE * page + first.teams.len() as u64;
        let mut teams = first.teams;

        while fetched < total_count {
            page += 1;
            let next = self.teams_page(page).await?;
            fetched = TEAMS_PER_PAGE * page + next.teams.len() as u64;
            teams.extend(next.teams);
        }

        tracing::debug!(pages = page + 1, total_count, teams = teams.len(), "Fetched all teams");
        Ok(teams)
    }

    /// Fetch one page of the team listing. Page 0 omits the `page` parameter.
    async fn teams_page(&self, page: u64) -> Result<TeamsPage, Error> {
        let mut params = vec![
            ("include_total_count", "true".to_string()),
            ("per_page", TEAMS_PER_PAGE.to_string()),
        ];
        if page > 0 {
            params.push(("page", page.to_string()));
        }
        tracing::debug!(page, "Fetching teams page");
        let value = self.get_json_query(TEAMS_PATH, &params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Reject blank path segments, which would turn a lookup into a listing.
pub(crate) fn require_segment(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArguments(format!("{field} must not be empty")));
    }
    Ok(())
}
