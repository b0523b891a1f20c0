//! HTTP request handlers
//!
//! GraphQL requests are executed against the schema held in [`AppState`]. The
//! response is always `200 OK`: failures of a query are reported in the
//! `errors` array of the GraphQL response, not through the HTTP status.

use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};

use crate::{AppState, GRAPHQL_PATH};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// POST /graphql
///
/// Execute a GraphQL query.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let operation = request.operation_name.clone();
    let response = state.schema.execute(request).await;

    if response.is_err() {
        tracing::debug!(
            operation = ?operation,
            errors = response.errors.len(),
            "GraphQL query completed with errors"
        );
    }

    Json(response)
}

/// GET /graphql
///
/// Serves the GraphiQL explorer, pointed at the GraphQL endpoint.
pub async fn graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .finish(),
    )
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status, always "healthy" while the process serves requests
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,
}
