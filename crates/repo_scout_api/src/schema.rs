//! GraphQL schema and query resolvers
//!
//! Each resolver binds a host client to the caller's token, runs one
//! aggregation and translates the result. A failed aggregation becomes a single
//! GraphQL error for that field; no partial object is returned.

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};
use github_client::{Credential, HostConnector, RepositoryHost};
use std::sync::Arc;

use crate::{
    errors,
    models::{Repository, RepositoryDetails},
};

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

/// The executable RepoScout schema.
pub type ScoutSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema; `connector` creates a host client for every query.
pub fn build_schema(connector: Arc<dyn HostConnector>) -> ScoutSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(connector)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Repositories of the user the token belongs to, newest first.
    async fn list_repositories(
        &self,
        ctx: &Context<'_>,
        token: String,
    ) -> async_graphql::Result<Vec<Repository>> {
        let host = connect(ctx, token)?;

        let summaries = repo_scout_core::list_repositories(host.as_ref())
            .await
            .map_err(|e| errors::aggregation_error(&e))?;

        Ok(summaries.into_iter().map(Repository::from).collect())
    }

    /// Size, visibility, root file count, first YAML file and webhooks of one repository.
    async fn get_repository_details(
        &self,
        ctx: &Context<'_>,
        token: String,
        owner: String,
        repo_name: String,
    ) -> async_graphql::Result<RepositoryDetails> {
        let host = connect(ctx, token)?;

        let detail = repo_scout_core::get_repository_details(host.as_ref(), &owner, &repo_name)
            .await
            .map_err(|e| errors::aggregation_error(&e))?;

        Ok(RepositoryDetails::from(detail))
    }
}

/// Creates a host client bound to the caller's token for this request.
fn connect(ctx: &Context<'_>, token: String) -> async_graphql::Result<Arc<dyn RepositoryHost>> {
    let connector = ctx.data::<Arc<dyn HostConnector>>()?;
    let credential = Credential::new(token);
    connector
        .connect(&credential)
        .map_err(|e| errors::host_error(&e))
}
