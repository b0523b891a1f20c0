//! Aggregation of the repository detail view.

use github_client::{Error as HostError, RepositoryHost, TreeEntry};
use tracing::{debug, info, instrument, warn};

use crate::{
    errors::{AggregationStep, Error},
    models::RepositoryDetail,
    yaml_locator::YamlLocator,
    ScoutResult,
};

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;

/// Builds the [`RepositoryDetail`] for `owner/repo`.
///
/// Repository metadata, the root listing and the webhook list do not depend on
/// each other and are fetched concurrently. The YAML search then starts from
/// the root listing already in hand, and the content of the file it finds is
/// downloaded from the file's own download URL.
///
/// A repository without any YAML file yields an empty `yml_content`. A YAML
/// file that exists but cannot be downloaded is an error.
///
/// # Errors
///
/// Returns `Error::AggregationFailed` naming the failing step if any host call
/// fails. No partial record is ever returned.
#[instrument(skip(host), fields(owner = %owner, repo = %repo))]
pub async fn get_repository_details(
    host: &dyn RepositoryHost,
    owner: &str,
    repo: &str,
) -> ScoutResult<RepositoryDetail> {
    info!("Aggregating repository details");

    let (repository, root_entries, webhooks) = tokio::try_join!(
        async {
            host.get_repository(owner, repo)
                .await
                .map_err(|e| fail(AggregationStep::RepositoryMetadata, e))
        },
        async {
            host.list_directory(owner, repo, "")
                .await
                .map_err(|e| fail(AggregationStep::RootListing, e))
        },
        async {
            host.list_webhooks(owner, repo)
                .await
                .map_err(|e| fail(AggregationStep::WebhookListing, e))
        },
    )?;

    let number_of_files = root_entries.len();

    let yaml_file = YamlLocator::new(host)
        .find_yaml_in_listing(owner, repo, root_entries)
        .await
        .map_err(|e| fail(AggregationStep::YamlSearch, e))?;

    let yml_content = match yaml_file {
        Some(entry) => fetch_yaml_content(host, &entry).await?,
        None => String::new(),
    };

    let detail = RepositoryDetail {
        name: repository.name.clone(),
        size: repository.size,
        owner: repository.owner_login().to_string(),
        forked_from: repository.forked_from().map(str::to_string),
        is_private: repository.private,
        number_of_files,
        yml_content,
        active_webhooks: webhooks
            .iter()
            .map(|hook| hook.target_url().to_string())
            .collect(),
    };

    info!(
        number_of_files = detail.number_of_files,
        webhook_count = detail.active_webhooks.len(),
        has_yaml = !detail.yml_content.is_empty(),
        "Aggregated repository details"
    );

    Ok(detail)
}

async fn fetch_yaml_content(host: &dyn RepositoryHost, entry: &TreeEntry) -> ScoutResult<String> {
    let download_url = entry.download_url.as_deref().ok_or_else(|| {
        fail(
            AggregationStep::YamlContent,
            HostError::HostMalformedResponse {
                message: format!("file '{}' has no download URL", entry.path),
            },
        )
    })?;

    debug!(path = %entry.path, "Downloading YAML file");
    host.get_raw_content(download_url)
        .await
        .map_err(|e| fail(AggregationStep::YamlContent, e))
}

fn fail(step: AggregationStep, source: HostError) -> Error {
    warn!(step = %step, error = %source, "Aggregation step failed");
    Error::aggregation(step, source)
}
