//! Core aggregation logic for RepoScout.
//!
//! This crate turns a handful of calls against a repository host into the two
//! records RepoScout serves:
//!
//! - [`RepositorySummary`] for every repository of the authenticated user
//!   ([`list_repositories`]).
//! - [`RepositoryDetail`] for a single repository ([`get_repository_details`]),
//!   including the content of the first YAML file found by a depth-first search
//!   of the repository tree ([`YamlLocator`]).
//!
//! Nothing is cached. Every call builds its records from fresh host responses
//! and any host failure aborts the whole aggregation with
//! [`Error::AggregationFailed`].

pub mod details;
pub mod errors;
pub mod listing;
pub mod models;
pub mod yaml_locator;

pub use details::get_repository_details;
pub use errors::{AggregationStep, Error};
pub use listing::list_repositories;
pub use models::{RepositoryDetail, RepositorySummary};
pub use yaml_locator::{is_yaml_file, YamlLocator, YAML_SUFFIX};

/// Result type for aggregation operations.
pub type ScoutResult<T> = Result<T, Error>;

#[cfg(test)]
pub(crate) mod mock_host;
