use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use mattermost_teams_mcp::{config::ConnectionConfig, state::AppState, tools};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_mcp::{HttpTransport, McpRouter, McpTracingLayer, StdioTransport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Parser)]
#[command(name = "mattermost-teams-mcp")]
#[command(about = "MCP server for querying Mattermost teams", long_about = None)]
struct Args {
    /// Base URL of the Mattermost server
    #[arg(long, env = "MATTERMOST_URL")]
    url: String,

    /// Access token sent as a bearer credential
    #[arg(long, env = "MATTERMOST_TOKEN", hide_env_values = true)]
    token: String,

    /// Timeout for each Mattermost API call in seconds (0 disables it)
    #[arg(long, default_value = "30")]
    http_timeout_secs: u64,

    /// Transport to use
    #[arg(short, long, default_value = "stdio")]
    transport: Transport,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// HTTP host to bind to (use 0.0.0.0 for public access)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Request timeout in seconds (for HTTP transport)
    #[arg(long, default_value = "60")]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), tower_mcp::BoxError> {
    let args = Args::parse();

    // Logs go to stderr so the stdio transport stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("mattermost_teams_mcp={}", args.log_level).parse()?)
                .add_directive(format!("tower_mcp={}", args.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ConnectionConfig::new(args.url, args.token);
    if args.http_timeout_secs > 0 {
        config = config.with_timeout(Duration::from_secs(args.http_timeout_secs));
    }

    tracing::info!(
        transport = ?args.transport,
        url = %config.url,
        http_timeout_secs = args.http_timeout_secs,
        "Starting mattermost-teams-mcp server"
    );

    let state = Arc::new(
        AppState::new(&config).map_err(|e| format!("Failed to create state: {}", e))?,
    );

    let instructions = "MCP server for querying Mattermost teams.\n\n\
         Available tools:\n\
         - get_team: Get a team by ID\n\
         - get_team_by_name: Get a team by name\n\
         - list_teams: List all teams (follows pagination)\n\
         - teams_info: Get one team by ID or name, or all teams\n\n\
         Every tool is read-only. Errors carry the server message, \
         HTTP status reason and status code.";

    let router = McpRouter::new()
        .server_info("mattermost-teams-mcp", env!("CARGO_PKG_VERSION"))
        .instructions(instructions)
        .tool(tools::get_team::build(state.clone()))
        .tool(tools::get_team_by_name::build(state.clone()))
        .tool(tools::list_teams::build(state.clone()))
        .tool(tools::teams_info::build(state.clone()));

    match args.transport {
        Transport::Stdio => {
            tracing::info!("Serving over stdio");
            StdioTransport::new(router).run().await?;
        }
        Transport::Http => {
            let addr = format!("{}:{}", args.host, args.port);
            tracing::info!(%addr, "Serving over HTTP");

            let layers = ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(
                    args.request_timeout_secs,
                )))
                .layer(McpTracingLayer::new())
                .into_inner();

            HttpTransport::new(router)
                .disable_origin_validation()
                .layer(layers)
                .serve(&addr)
                .await?;
        }
    }

    Ok(())
}
