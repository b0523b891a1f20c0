//! Repository types.
//!
//! This module contains the repository metadata returned by the host, both for
//! a single repository and for the authenticated user's repository listing.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Represents a repository as reported by the host.
///
/// Only the fields needed to describe a repository are kept; everything else
/// in the host payload is ignored.
///
/// # Examples
///
/// ```rust
/// use github_client::Repository;
///
/// let repo: Repository = serde_json::from_str(r#"{
///     "name": "hello-world",
///     "size": 108,
///     "private": false,
///     "owner": { "login": "octocat" },
///     "parent": { "full_name": "upstream/hello-world" }
/// }"#).unwrap();
///
/// assert_eq!(repo.owner_login(), "octocat");
/// assert_eq!(repo.forked_from(), Some("upstream/hello-world"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The name of the repository (without owner)
    pub name: String,

    /// Repository size in the host's storage units
    pub size: u64,

    /// The account that owns the repository
    pub owner: Account,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// The repository this one was forked from, if any
    #[serde(default)]
    pub parent: Option<ParentRepository>,
}

impl Repository {
    /// Returns the login of the repository owner.
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }

    /// Returns the full `owner/name` of the fork parent, if the host reports one.
    pub fn forked_from(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.full_name.as_str())
    }
}

/// A host account (user or organization).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The login name of the account
    pub login: String,
}

/// The parent of a forked repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRepository {
    /// The full name of the parent repository (owner/name)
    pub full_name: String,
}
