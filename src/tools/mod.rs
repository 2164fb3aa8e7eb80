pub mod get_team;
pub mod get_team_by_name;
pub mod list_teams;
pub mod teams_info;
