//! Aggregation of the repository list.

use github_client::RepositoryHost;
use tracing::{info, instrument, warn};

use crate::{
    errors::{AggregationStep, Error},
    models::RepositorySummary,
    ScoutResult,
};

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;

/// Lists the authenticated user's repositories as summaries.
///
/// The host's order (newest first) is kept as-is.
///
/// # Errors
///
/// Returns `Error::AggregationFailed` if the host call fails.
#[instrument(skip(host))]
pub async fn list_repositories(host: &dyn RepositoryHost) -> ScoutResult<Vec<RepositorySummary>> {
    let repositories = host.list_user_repositories().await.map_err(|e| {
        warn!(error = %e, "Failed to list repositories");
        Error::aggregation(AggregationStep::RepositoryListing, e)
    })?;

    info!(count = repositories.len(), "Listed repositories");

    Ok(repositories.iter().map(RepositorySummary::from).collect())
}
