//! Crate for reading repository data from the GitHub REST API.
//!
//! This crate provides a client for making requests to GitHub on behalf of a
//! caller, authenticated with the caller's own token. It only reads: repository
//! metadata, directory listings, raw file content and webhook configuration.

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::StatusCode;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

pub mod contents;
pub use contents::{EntryType, TreeEntry};

pub mod credential;
pub use credential::Credential;

pub mod errors;
pub use errors::Error;

pub mod repository;
pub use repository::{Account, ParentRepository, Repository};

pub mod webhook;
pub use webhook::{Webhook, WebhookConfig};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Default base URI of the GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default upper bound for a single host call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read operations against a repository host.
///
/// Implementations are bound to a single caller credential. None of the
/// operations retry; a failed call is reported to the caller as-is.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists the repositories of the authenticated user, newest first.
    ///
    /// Only the first page returned by the host is read.
    ///
    /// # Errors
    ///
    /// Returns `Error::HostRejected` for non-success statuses,
    /// `Error::HostMalformedResponse` if the body is not a list of repositories
    /// and `Error::HostUnavailable` if the host cannot be reached.
    async fn list_user_repositories(&self) -> Result<Vec<Repository>, Error>;

    /// Fetches metadata for a single repository.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error>;

    /// Lists the entries of a directory, in the order returned by the host.
    ///
    /// An empty `path` lists the repository root.
    async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<TreeEntry>, Error>;

    /// Downloads raw file content from a pre-resolved download URL.
    ///
    /// No authorization header is sent with this call.
    async fn get_raw_content(&self, download_url: &str) -> Result<String, Error>;

    /// Lists the webhooks configured on a repository, in host order.
    async fn list_webhooks(&self, owner: &str, repo: &str) -> Result<Vec<Webhook>, Error>;
}

/// Creates host clients bound to a caller credential.
///
/// A connector is long-lived and shared between requests; the clients it hands
/// out live for the duration of one request.
pub trait HostConnector: Send + Sync {
    /// Returns a host client that authenticates every call with `credential`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ClientConfiguration` if the client cannot be built.
    fn connect(&self, credential: &Credential) -> Result<Arc<dyn RepositoryHost>, Error>;
}

/// Connection settings for the repository host.
#[derive(Debug, Clone)]
pub struct HostSettings {
    /// Base URI of the REST API, e.g. `https://api.github.com`
    pub api_base_url: String,

    /// Upper bound for connecting to and reading from the host, per call
    pub request_timeout: Duration,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// A client for reading repository data from the GitHub API on behalf of a caller.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
    downloader: reqwest::Client,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from pre-built HTTP clients.
    ///
    /// # Arguments
    ///
    /// * `client` - An `Octocrab` client that already carries the caller's authorization.
    /// * `downloader` - A plain HTTP client used for unauthenticated content downloads.
    pub fn new(client: Octocrab, downloader: reqwest::Client) -> Self {
        Self { client, downloader }
    }

    /// Creates a `GitHubClient` that authenticates with the given credential.
    ///
    /// # Errors
    ///
    /// Returns `Error::ClientConfiguration` if either HTTP client cannot be built.
    pub fn with_credential(settings: &HostSettings, credential: &Credential) -> Result<Self, Error> {
        let client = create_token_client(settings, credential)?;
        let downloader = create_download_client(settings)?;
        Ok(Self::new(client, downloader))
    }
}

impl GitHubClient {
    /// Issues an authenticated GET against `route` and decodes the JSON body.
    ///
    /// The status is checked before the body is decoded, so a non-success
    /// response is always `HostRejected`, whatever its body looks like.
    async fn get_json<T: DeserializeOwned>(&self, route: String, context: &str) -> Result<T, Error> {
        let response = self
            .client
            ._get(route)
            .await
            .map_err(|e| map_octocrab_error(context, e))?;

        let status = response.status();
        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|e| map_octocrab_error(context, e))?;

        if !status.is_success() {
            let message = rejection_message(status, &body);
            warn!(
                status = status.as_u16(),
                error_message = %message,
                "{}. Received an error from GitHub",
                context
            );
            return Err(Error::HostRejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(
                error_message = %e,
                "{}. The response did not have the expected shape.",
                context
            );
            Error::HostMalformedResponse {
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    #[instrument(skip(self))]
    async fn list_user_repositories(&self) -> Result<Vec<Repository>, Error> {
        let route = format!("{}?sort=created", api_route(["user", "repos"])?);
        let repositories: Vec<Repository> = self
            .get_json(route, "Failed to list user repositories")
            .await?;

        debug!(
            count = repositories.len(),
            "Retrieved repositories for authenticated user"
        );
        Ok(repositories)
    }

    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        let route = api_route(["repos", owner, repo])?;
        self.get_json(route, "Failed to get repository").await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, path = %path))]
    async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<TreeEntry>, Error> {
        let route = api_route(
            ["repos", owner, repo, "contents"]
                .into_iter()
                .chain(path.split('/').filter(|segment| !segment.is_empty())),
        )?;

        let entries: Vec<TreeEntry> = self
            .get_json(route, "Failed to list directory contents")
            .await?;

        debug!(count = entries.len(), "Listed directory contents");
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn get_raw_content(&self, download_url: &str) -> Result<String, Error> {
        let response = self
            .downloader
            .get(download_url)
            .send()
            .await
            .map_err(|e| {
                error!(error_message = %e, "Failed to download file content");
                Error::HostUnavailable {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = rejection_message(status, &body);
            warn!(
                status = status.as_u16(),
                "Content download was rejected by the host"
            );
            return Err(Error::HostRejected {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error_message = %e, "Failed to read file content");
            Error::HostUnavailable {
                message: e.to_string(),
            }
        })?;

        String::from_utf8(bytes.to_vec()).map_err(|e| Error::HostMalformedResponse {
            message: format!("file content is not valid UTF-8: {}", e),
        })
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_webhooks(&self, owner: &str, repo: &str) -> Result<Vec<Webhook>, Error> {
        let route = api_route(["repos", owner, repo, "hooks"])?;
        self.get_json(route, "Failed to list webhooks").await
    }
}

/// Hands out [`GitHubClient`] instances bound to a caller credential.
///
/// The unauthenticated download client is built once and shared by every
/// client this connector creates.
#[derive(Debug, Clone)]
pub struct GitHubConnector {
    settings: HostSettings,
    downloader: reqwest::Client,
}

impl GitHubConnector {
    /// Creates a connector for the host described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ClientConfiguration` if the download client cannot be built.
    pub fn new(settings: HostSettings) -> Result<Self, Error> {
        let downloader = create_download_client(&settings)?;
        Ok(Self {
            settings,
            downloader,
        })
    }
}

impl HostConnector for GitHubConnector {
    fn connect(&self, credential: &Credential) -> Result<Arc<dyn RepositoryHost>, Error> {
        let client = create_token_client(&self.settings, credential)?;
        Ok(Arc::new(GitHubClient::new(client, self.downloader.clone())))
    }
}

/// Creates an `Octocrab` client that sends `Authorization: token <credential>`.
///
/// Retries are disabled and every call is bounded by the configured timeout.
///
/// # Errors
///
/// Returns `Error::ClientConfiguration` if the base URI is invalid or the
/// client cannot be built.
#[instrument(skip(credential))]
pub fn create_token_client(
    settings: &HostSettings,
    credential: &Credential,
) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .base_uri(settings.api_base_url.clone())
        .map_err(|e| {
            error!(
                base_uri = %settings.api_base_url,
                error_message = %e,
                "Invalid repository host base URI"
            );
            Error::ClientConfiguration(format!(
                "invalid base URI '{}': {}",
                settings.api_base_url, e
            ))
        })?
        .add_header(AUTHORIZATION, credential.authorization_header())
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(Some(settings.request_timeout))
        .set_read_timeout(Some(settings.request_timeout))
        .build()
        .map_err(|e| {
            error!(error_message = %e, "Failed to build Octocrab client");
            Error::ClientConfiguration(format!("failed to build host client: {}", e))
        })
}

fn create_download_client(settings: &HostSettings) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .connect_timeout(settings.request_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|e| Error::ClientConfiguration(format!("failed to build download client: {}", e)))
}

/// Builds a percent-encoded API route from raw path segments.
fn api_route<'a>(segments: impl IntoIterator<Item = &'a str>) -> Result<String, Error> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| Error::ClientConfiguration(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| Error::ClientConfiguration("cannot build API route".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}

/// Picks the message reported for a non-success response.
///
/// GitHub error bodies are JSON objects with a `message` field. Proxies and
/// outages answer with HTML or plain text, which is passed through trimmed.
fn rejection_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Classifies an octocrab failure that happened before a status was received,
/// or while reading the body, and logs it.
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::InvalidUtf8 { source, .. } => {
            error!(
                error_message = %source,
                "{}. The message wasn't valid UTF-8.",
                message
            );
            Error::HostMalformedResponse {
                message: source.to_string(),
            }
        }
        octocrab::Error::UriParse { source, .. } => {
            error!(error_message = %source, "{}. Failed to parse URI.", message);
            Error::ClientConfiguration(source.to_string())
        }
        octocrab::Error::Uri { source, .. } => {
            error!(error_message = %source, "{}. Failed to parse URI.", message);
            Error::ClientConfiguration(source.to_string())
        }
        octocrab::Error::InvalidHeaderValue { source, .. } => {
            error!(
                error_message = %source,
                "{}. One of the header values was invalid.",
                message
            );
            Error::ClientConfiguration(source.to_string())
        }
        other => {
            error!(error_message = %other, "{}. The host could not be reached.", message);
            Error::HostUnavailable {
                message: other.to_string(),
            }
        }
    }
}
