//! RepoScout GraphQL API
//!
//! This crate exposes RepoScout's two queries over GraphQL:
//!
//! - `listRepositories(token)` - the repositories of the token's owner
//! - `getRepositoryDetails(token, owner, repoName)` - the aggregated detail
//!   view of one repository
//!
//! # Architecture
//!
//! This crate exists in the transport layer and handles:
//! - GraphQL schema and resolvers
//! - Translation from domain records to GraphQL objects
//! - Error mapping from domain failures to GraphQL errors
//! - Routing, configuration and server startup
//!
//! The dependency flows: API → `repo_scout_core` → `github_client`, never the reverse.

use github_client::HostConnector;
use std::sync::Arc;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod schema;
pub mod server;
pub mod translation;

// Re-export key types for convenience
pub use config::ApiConfig;
pub use errors::ConfigError;
pub use schema::{build_schema, QueryRoot, ScoutSchema};
pub use server::ApiServer;

/// Path of the GraphQL endpoint
pub const GRAPHQL_PATH: &str = "/graphql";

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers
///
/// Holds the executable schema. Host clients are created per request from the
/// caller's token, so nothing request-specific lives here.
#[derive(Clone)]
pub struct AppState {
    pub schema: ScoutSchema,
}

impl AppState {
    /// Create new application state around a host connector
    pub fn new(connector: Arc<dyn HostConnector>) -> Self {
        Self {
            schema: build_schema(connector),
        }
    }
}
