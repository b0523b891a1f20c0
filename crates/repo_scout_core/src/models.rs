//! Records produced by the aggregators.

use github_client::Repository;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A short description of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository name (without owner)
    pub name: String,

    /// Repository size in the host's storage units
    pub size: u64,

    /// Login of the repository owner
    pub owner: String,

    /// Full `owner/name` of the fork parent; `None` if the repository is not a fork
    pub forked_from: Option<String>,
}

impl From<&Repository> for RepositorySummary {
    fn from(value: &Repository) -> Self {
        Self {
            name: value.name.clone(),
            size: value.size,
            owner: value.owner_login().to_string(),
            forked_from: value.forked_from().map(str::to_string),
        }
    }
}

impl From<Repository> for RepositorySummary {
    fn from(value: Repository) -> Self {
        Self::from(&value)
    }
}

/// The aggregated view of a single repository.
///
/// Every field is populated from one `(owner, name)` pair resolved with one
/// credential. A detail record is never partially populated: if any required
/// host call fails, no record is produced at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDetail {
    /// Repository name (without owner)
    pub name: String,

    /// Repository size in the host's storage units
    pub size: u64,

    /// Login of the repository owner
    pub owner: String,

    /// Full `owner/name` of the fork parent; `None` if the repository is not a fork
    pub forked_from: Option<String>,

    /// Whether the repository is private
    pub is_private: bool,

    /// Number of entries in the root directory (not recursive)
    pub number_of_files: usize,

    /// Raw text of the first YAML file found, or an empty string if there is none
    pub yml_content: String,

    /// Webhook target URLs, in host order
    pub active_webhooks: Vec<String>,
}

