use super::*;
use std::error::Error as StdError;

#[test]
fn test_aggregation_failed_keeps_cause() {
    let error = Error::aggregation(
        AggregationStep::WebhookListing,
        github_client::Error::HostRejected {
            status: 403,
            message: "Must have admin rights to Repository.".to_string(),
        },
    );

    assert_eq!(error.to_string(), "Aggregation failed during webhook listing");
    assert_eq!(error.step(), AggregationStep::WebhookListing);
    assert_eq!(error.host_error().status(), Some(403));

    let source = error.source().expect("cause should be preserved");
    assert_eq!(
        source.to_string(),
        "Repository host rejected the request with status 403: Must have admin rights to Repository."
    );
}

#[test]
fn test_step_names() {
    assert_eq!(AggregationStep::RepositoryListing.to_string(), "repository listing");
    assert_eq!(AggregationStep::RepositoryMetadata.to_string(), "repository metadata");
    assert_eq!(AggregationStep::RootListing.to_string(), "root listing");
    assert_eq!(AggregationStep::YamlSearch.to_string(), "yaml search");
    assert_eq!(AggregationStep::YamlContent.to_string(), "yaml content");
    assert_eq!(AggregationStep::WebhookListing.to_string(), "webhook listing");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
