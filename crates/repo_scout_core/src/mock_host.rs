//! In-memory repository host used by the unit tests.

use async_trait::async_trait;
use github_client::{Error as HostError, RepositoryHost, Repository, TreeEntry, Webhook};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

/// How a mocked call should fail.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    Unavailable,
    Rejected(u16),
    Malformed,
}

impl Failure {
    fn to_error(self) -> HostError {
        match self {
            Failure::Unavailable => HostError::HostUnavailable {
                message: "connection reset".to_string(),
            },
            Failure::Rejected(status) => HostError::HostRejected {
                status,
                message: "rejected by mock".to_string(),
            },
            Failure::Malformed => HostError::HostMalformedResponse {
                message: "unexpected body".to_string(),
            },
        }
    }
}

/// A repository host backed by maps, recording every call it receives.
///
/// Failure keys are `user_repos`, `repo`, `hooks`, `dir:<path>` and
/// `raw:<url>`.
#[derive(Default)]
pub(crate) struct MockHost {
    repository: Option<Repository>,
    user_repositories: Vec<Repository>,
    directories: HashMap<String, Vec<TreeEntry>>,
    contents: HashMap<String, String>,
    webhooks: Vec<Webhook>,
    failures: HashMap<String, Failure>,
    calls: Mutex<Vec<String>>,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_repository(mut self, repository: Repository) -> Self {
        self.repository = Some(repository);
        self
    }

    pub(crate) fn with_user_repositories(mut self, repositories: Vec<Repository>) -> Self {
        self.user_repositories = repositories;
        self
    }

    pub(crate) fn with_directory(mut self, path: &str, entries: Vec<TreeEntry>) -> Self {
        self.directories.insert(path.to_string(), entries);
        self
    }

    pub(crate) fn with_content(mut self, download_url: &str, content: &str) -> Self {
        self.contents
            .insert(download_url.to_string(), content.to_string());
        self
    }

    pub(crate) fn with_webhooks(mut self, urls: &[&str]) -> Self {
        self.webhooks = urls
            .iter()
            .enumerate()
            .map(|(i, url)| webhook(i as u64 + 1, url))
            .collect();
        self
    }

    pub(crate) fn failing(mut self, key: &str, failure: Failure) -> Self {
        self.failures.insert(key.to_string(), failure);
        self
    }

    /// Every call received so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls whose key starts with `prefix`.
    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, key: String) -> Result<(), HostError> {
        self.calls.lock().unwrap().push(key.clone());
        match self.failures.get(&key) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RepositoryHost for MockHost {
    async fn list_user_repositories(&self) -> Result<Vec<Repository>, HostError> {
        self.record("user_repos".to_string())?;
        Ok(self.user_repositories.clone())
    }

    async fn get_repository(&self, _owner: &str, _repo: &str) -> Result<Repository, HostError> {
        self.record("repo".to_string())?;
        self.repository.clone().ok_or(HostError::HostRejected {
            status: 404,
            message: "Not Found".to_string(),
        })
    }

    async fn list_directory(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
    ) -> Result<Vec<TreeEntry>, HostError> {
        self.record(format!("dir:{path}"))?;
        self.directories
            .get(path)
            .cloned()
            .ok_or(HostError::HostRejected {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn get_raw_content(&self, download_url: &str) -> Result<String, HostError> {
        self.record(format!("raw:{download_url}"))?;
        self.contents
            .get(download_url)
            .cloned()
            .ok_or(HostError::HostRejected {
                status: 404,
                message: "404: Not Found".to_string(),
            })
    }

    async fn list_webhooks(&self, _owner: &str, _repo: &str) -> Result<Vec<Webhook>, HostError> {
        self.record("hooks".to_string())?;
        Ok(self.webhooks.clone())
    }
}

/// A file entry at `path` with a download URL of `raw://<path>`.
pub(crate) fn file(path: &str) -> TreeEntry {
    entry(path, "file", Some(format!("raw://{path}")))
}

/// A directory entry at `path`.
pub(crate) fn dir(path: &str) -> TreeEntry {
    entry(path, "dir", None)
}

/// An entry of an arbitrary kind at `path`.
pub(crate) fn entry(path: &str, kind: &str, download_url: Option<String>) -> TreeEntry {
    let name = path.rsplit('/').next().unwrap_or(path);
    serde_json::from_value(json!({
        "name": name,
        "path": path,
        "type": kind,
        "sha": format!("sha-{path}"),
        "size": 0,
        "download_url": download_url,
    }))
    .unwrap()
}

pub(crate) fn repository(name: &str, owner: &str, size: u64, parent: Option<&str>) -> Repository {
    serde_json::from_value(json!({
        "name": name,
        "size": size,
        "private": false,
        "owner": { "login": owner },
        "parent": parent.map(|full_name| json!({ "full_name": full_name })),
    }))
    .unwrap()
}

pub(crate) fn webhook(id: u64, url: &str) -> Webhook {
    serde_json::from_value(json!({
        "id": id,
        "active": true,
        "config": { "url": url, "content_type": "json" }
    }))
    .unwrap()
}
