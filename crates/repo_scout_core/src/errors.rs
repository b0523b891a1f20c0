//! Aggregation errors.

use std::fmt;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// The stage of an aggregation in which a host call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStep {
    /// Listing the authenticated user's repositories
    RepositoryListing,
    /// Fetching repository metadata
    RepositoryMetadata,
    /// Listing the repository root directory
    RootListing,
    /// Searching the repository tree for a YAML file
    YamlSearch,
    /// Downloading the content of the YAML file that was found
    YamlContent,
    /// Listing the repository webhooks
    WebhookListing,
}

impl AggregationStep {
    /// Returns a short, stable name for the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepositoryListing => "repository listing",
            Self::RepositoryMetadata => "repository metadata",
            Self::RootListing => "root listing",
            Self::YamlSearch => "yaml search",
            Self::YamlContent => "yaml content",
            Self::WebhookListing => "webhook listing",
        }
    }
}

impl fmt::Display for AggregationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A required host call failed; the aggregate was discarded.
    #[error("Aggregation failed during {step}")]
    AggregationFailed {
        step: AggregationStep,
        #[source]
        source: github_client::Error,
    },
}

impl Error {
    /// Wraps a host failure that happened during `step`.
    pub fn aggregation(step: AggregationStep, source: github_client::Error) -> Self {
        Error::AggregationFailed { step, source }
    }

    /// The step that failed.
    pub fn step(&self) -> AggregationStep {
        match self {
            Error::AggregationFailed { step, .. } => *step,
        }
    }

    /// The underlying host failure.
    pub fn host_error(&self) -> &github_client::Error {
        match self {
            Error::AggregationFailed { source, .. } => source,
        }
    }
}
