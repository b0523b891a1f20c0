//! HTTP routing configuration
//!
//! # Route Structure
//!
//! - POST   /graphql - Execute a GraphQL query
//! - GET    /graphql - GraphiQL explorer
//! - GET    /health  - Health check

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState, GRAPHQL_PATH};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Upper bound for handling a single HTTP request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - The GraphQL endpoint and the GraphiQL explorer
/// - CORS configuration
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    // Browser clients post queries from other origins
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600));

    // Request headers stay out of the spans
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    let timeout_layer = TimeoutLayer::new(REQUEST_TIMEOUT);

    Router::new()
        .route(
            GRAPHQL_PATH,
            get(handlers::graphiql).post(handlers::graphql_handler),
        )
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
