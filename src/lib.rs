//! MCP server and API client for querying Mattermost teams.
//!
//! The [`client`] module is usable on its own; [`tools`] exposes it to MCP
//! clients through tower-mcp.

pub mod client;
pub mod config;
pub mod state;
pub mod tools;
