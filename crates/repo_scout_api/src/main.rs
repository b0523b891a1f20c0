//! RepoScout GraphQL API Server
//!
//! Main binary for running the API server in production or development.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GITHUB_API_URL`: Base URI of the GitHub REST API (default: https://api.github.com)
//! - `HOST_REQUEST_TIMEOUT_SECS`: Upper bound for a single GitHub call (default: 10)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use github_client::GitHubConnector;
use repo_scout_api::{ApiConfig, ApiServer, AppState, GRAPHQL_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = ApiConfig::from_env()?;
    let connector = GitHubConnector::new(config.host_settings.clone())?;

    let state = AppState::new(Arc::new(connector));

    tracing::info!("Starting RepoScout API server");
    tracing::info!("GraphQL endpoint: {}", GRAPHQL_PATH);
    tracing::info!(
        api_base_url = %config.host_settings.api_base_url,
        request_timeout_secs = config.host_settings.request_timeout.as_secs(),
        "Repository host"
    );

    let server = ApiServer::new(config, state);

    // Start server with graceful shutdown
    server.serve().await
}
