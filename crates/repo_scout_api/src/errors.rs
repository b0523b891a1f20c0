//! Error handling and GraphQL error conversion
//!
//! Domain failures keep their structure until they reach this module. Here
//! they are rendered into a single GraphQL error per failed operation: the
//! message carries the cause chain as text and the extensions carry the kind
//! (`code`), the failing `step` and, for rejected host calls, the host `status`.

use async_graphql::ErrorExtensions;
use std::error::Error as StdError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while loading the API configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        variable: String,
        value: String,
        reason: String,
    },
}

/// Converts a failed aggregation into a GraphQL error.
pub fn aggregation_error(error: &repo_scout_core::Error) -> async_graphql::Error {
    let host_error = error.host_error();
    let step = error.step();

    tracing::warn!(
        step = %step,
        code = host_error.code(),
        "Query failed: {}",
        render_chain(error)
    );

    async_graphql::Error::new(render_chain(error)).extend_with(|_, extensions| {
        extensions.set("code", host_error.code());
        extensions.set("step", step.as_str());
        if let Some(status) = host_error.status() {
            extensions.set("status", i32::from(status));
        }
    })
}

/// Converts a host failure that happened outside of an aggregation (for
/// example while building the client) into a GraphQL error.
pub fn host_error(error: &github_client::Error) -> async_graphql::Error {
    tracing::warn!(code = error.code(), "Query failed: {}", error);

    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("code", error.code());
        if let Some(status) = error.status() {
            extensions.set("status", i32::from(status));
        }
    })
}

/// Renders an error and all of its sources as `outer: inner: innermost`.
fn render_chain(error: &dyn StdError) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
