//! MCP integration tests using tower-mcp's TestClient + wiremock.
//!
//! These tests exercise the full JSON-RPC pipeline: client request -> router ->
//! tool handler -> wiremock mock -> JSON response text.

use std::sync::Arc;

use mattermost_teams_mcp::{state::AppState, tools};
use serde_json::{Value, json};
use tower_mcp::{McpRouter, TestClient};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ────────────────────────────────────────────────────────────────

fn test_state(server: &MockServer) -> Arc<AppState> {
    Arc::new(AppState::with_base_url(&server.uri()).expect("failed to create test state"))
}

fn test_router(state: Arc<AppState>) -> McpRouter {
    McpRouter::new()
        .server_info("mattermost-teams-mcp", "0.1.0")
        .tool(tools::get_team::build(state.clone()))
        .tool(tools::get_team_by_name::build(state.clone()))
        .tool(tools::list_teams::build(state.clone()))
        .tool(tools::teams_info::build(state.clone()))
}

async fn initialized_client(server: &MockServer) -> TestClient {
    let state = test_state(server);
    let router = test_router(state);
    let mut client = TestClient::from_router(router);
    client.initialize().await;
    client
}

fn team_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "create_at": 1698321405123u64,
        "update_at": 1698321405123u64,
        "delete_at": 0,
        "display_name": format!("Team {name}"),
        "name": name,
        "type": "O",
        "allow_open_invite": true
    })
}

fn parse_output(text: &str) -> Value {
    serde_json::from_str(text).expect("tool output should be JSON")
}

/// Extract the `{msg, status, status_code}` payload from a tool error text.
fn parse_failure(text: &str) -> Value {
    let start = text.find('{').expect("error text should carry a JSON payload");
    serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<Value>()
        .next()
        .expect("payload present")
        .expect("payload should be JSON")
}

async fn mount_team(server: &MockServer, id: &str, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v4/teams/{id}")))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(team_json(id, name)))
        .mount(server)
        .await;
}

async fn mount_team_by_name(server: &MockServer, id: &str, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v4/teams/name/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(team_json(id, name)))
        .mount(server)
        .await;
}

/// Mount a two-page listing: 60 teams on page 0, 2 on page 1.
async fn mount_two_pages(server: &MockServer) {
    let first: Vec<Value> = (0..60)
        .map(|i| team_json(&format!("id{i}"), &format!("team-{i}")))
        .collect();
    let second: Vec<Value> = (60..62)
        .map(|i| team_json(&format!("id{i}"), &format!("team-{i}")))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v4/teams"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"teams": first, "total_count": 62})),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/teams"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"teams": second, "total_count": 62})),
        )
        .expect(1)
        .mount(server)
        .await;
}

// ── Discovery tests ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_tools_returns_all_4() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let tools = client.list_tools().await;

    assert_eq!(tools.len(), 4);
    let names: Vec<&str> = tools
        .iter()
        .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
        .collect();
    assert!(names.contains(&"get_team"));
    assert!(names.contains(&"get_team_by_name"));
    assert!(names.contains(&"list_teams"));
    assert!(names.contains(&"teams_info"));
}

// ── Tool tests ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn tool_get_team() {
    let server = MockServer::start().await;
    mount_team(&server, "abc123", "acme").await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_team", json!({"team_id": "abc123"}))
        .await;

    assert!(!result.is_error);
    let output = parse_output(&result.all_text());
    assert_eq!(output["changed"], json!(false));
    assert_eq!(output["team"], team_json("abc123", "acme"));
}

#[tokio::test]
async fn tool_get_team_accepts_id_alias() {
    let server = MockServer::start().await;
    mount_team(&server, "abc123", "acme").await;

    let mut client = initialized_client(&server).await;
    let result = client.call_tool("get_team", json!({"id": "abc123"})).await;

    assert!(!result.is_error);
    assert_eq!(parse_output(&result.all_text())["team"]["id"], "abc123");
}

#[tokio::test]
async fn tool_get_team_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/teams/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Team not found"})),
        )
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_team", json!({"team_id": "missing"}))
        .await;

    assert!(result.is_error);
    assert_eq!(
        parse_failure(&result.all_text()),
        json!({"msg": "Team not found", "status": "Not Found", "status_code": 404})
    );
}

#[tokio::test]
async fn tool_get_team_rejects_blank_id() {
    let server = MockServer::start().await;

    let mut client = initialized_client(&server).await;
    let result = client.call_tool("get_team", json!({"team_id": "  "})).await;

    assert!(result.is_error);
    let failure = parse_failure(&result.all_text());
    assert!(failure["msg"].as_str().unwrap().contains("team_id must not be empty"));
    assert!(failure.get("status_code").is_none());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn tool_get_team_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/teams/abc123"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_team", json!({"team_id": "abc123"}))
        .await;

    assert!(result.is_error);
    let text = result.all_text();
    assert!(!text.contains("boom"));
    assert_eq!(
        parse_failure(&text),
        json!({
            "msg": "Unexpected server side error.",
            "status": "Internal Server Error",
            "status_code": 500
        })
    );
}

#[tokio::test]
async fn tool_get_team_by_name() {
    let server = MockServer::start().await;
    mount_team_by_name(&server, "abc123", "acme").await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_team_by_name", json!({"team_name": "acme"}))
        .await;

    assert!(!result.is_error);
    let output = parse_output(&result.all_text());
    assert_eq!(output["team"]["name"], "acme");
}

#[tokio::test]
async fn tool_get_team_by_name_rejects_empty_name() {
    let server = MockServer::start().await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_team_by_name", json!({"team_name": ""}))
        .await;

    assert!(result.is_error);
    let failure = parse_failure(&result.all_text());
    assert!(failure["msg"].as_str().unwrap().contains("team_name must not be empty"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn tool_list_teams() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let mut client = initialized_client(&server).await;
    let result = client.call_tool("list_teams", json!({})).await;

    assert!(!result.is_error);
    let output = parse_output(&result.all_text());
    let teams = output["teams"].as_array().expect("teams array");
    assert_eq!(teams.len(), 62);
    assert_eq!(teams[0]["id"], "id0");
    assert_eq!(teams[61]["id"], "id61");
}

#[tokio::test]
async fn tool_list_teams_page_failure() {
    let server = MockServer::start().await;

    let first: Vec<Value> = (0..60)
        .map(|i| team_json(&format!("id{i}"), &format!("team-{i}")))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/v4/teams"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"teams": first, "total_count": 90})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/teams"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client.call_tool("list_teams", json!({})).await;

    assert!(result.is_error);
    let text = result.all_text();
    assert!(!text.contains("id0"));
    assert_eq!(parse_failure(&text)["status_code"], 502);
}

#[tokio::test]
async fn tool_teams_info_wraps_single_team() {
    let server = MockServer::start().await;
    mount_team(&server, "abc123", "acme").await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("teams_info", json!({"team_id": "abc123"}))
        .await;

    assert!(!result.is_error);
    let output = parse_output(&result.all_text());
    assert_eq!(output["changed"], json!(false));
    assert_eq!(output["teams"], json!([team_json("abc123", "acme")]));
}

#[tokio::test]
async fn tool_teams_info_by_name() {
    let server = MockServer::start().await;
    mount_team_by_name(&server, "abc123", "acme").await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("teams_info", json!({"name": "acme"}))
        .await;

    assert!(!result.is_error);
    let output = parse_output(&result.all_text());
    assert_eq!(output["teams"][0]["id"], "abc123");
}

#[tokio::test]
async fn tool_teams_info_lists_all() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let mut client = initialized_client(&server).await;
    let result = client.call_tool("teams_info", json!({})).await;

    assert!(!result.is_error);
    let output = parse_output(&result.all_text());
    assert_eq!(output["teams"].as_array().map(Vec::len), Some(62));
}

#[tokio::test]
async fn tool_teams_info_rejects_id_and_name() {
    let server = MockServer::start().await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "teams_info",
            json!({"team_id": "abc123", "team_name": "acme"}),
        )
        .await;

    assert!(result.is_error);
    let failure = parse_failure(&result.all_text());
    assert!(failure["msg"].as_str().unwrap().contains("mutually exclusive"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
