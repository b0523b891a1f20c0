//! Translation from domain records to GraphQL objects

use repo_scout_core::{RepositoryDetail, RepositorySummary};

use crate::models::{Repository, RepositoryDetails};

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;

impl From<RepositorySummary> for Repository {
    fn from(summary: RepositorySummary) -> Self {
        Self {
            name: summary.name,
            size: summary.size,
            owner: summary.owner,
            forked_from: summary.forked_from,
        }
    }
}

impl From<RepositoryDetail> for RepositoryDetails {
    fn from(detail: RepositoryDetail) -> Self {
        Self {
            name: detail.name,
            size: detail.size,
            owner: detail.owner,
            is_private: detail.is_private,
            number_of_files: detail.number_of_files as u64,
            yml_content: detail.yml_content,
            active_webhooks: detail.active_webhooks,
            forked_from: detail.forked_from,
        }
    }
}
