//! GraphQL object types
//!
//! Field names are exposed in camelCase (`forkedFrom`, `isPrivate`,
//! `numberOfFiles`, `ymlContent`, `activeWebhooks`).

use async_graphql::SimpleObject;

/// A repository owned by the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Repository size as reported by GitHub
    pub size: u64,

    /// Login of the repository owner
    pub owner: String,

    /// Full name (owner/name) of the repository this one was forked from
    pub forked_from: Option<String>,
}

/// The aggregated detail view of a single repository.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct RepositoryDetails {
    /// Repository name
    pub name: String,

    /// Repository size as reported by GitHub
    pub size: u64,

    /// Login of the repository owner
    pub owner: String,

    /// Whether the repository is private
    pub is_private: bool,

    /// Number of entries in the repository root
    pub number_of_files: u64,

    /// Content of the first `.yml` file found, or an empty string
    pub yml_content: String,

    /// Target URLs of the configured webhooks
    pub active_webhooks: Vec<String>,

    /// Full name (owner/name) of the repository this one was forked from
    pub forked_from: Option<String>,
}
