use super::*;
use repo_scout_core::AggregationStep;

fn extension(error: &async_graphql::Error, key: &str) -> Option<serde_json::Value> {
    let extensions = serde_json::to_value(error.extensions.as_ref()?).unwrap();
    extensions.get(key).cloned()
}

#[test]
fn test_aggregation_error_message_contains_cause() {
    let error = repo_scout_core::Error::aggregation(
        AggregationStep::RepositoryMetadata,
        github_client::Error::HostRejected {
            status: 404,
            message: "Not Found".to_string(),
        },
    );

    let gql = aggregation_error(&error);

    assert_eq!(
        gql.message,
        "Aggregation failed during repository metadata: Repository host rejected the request with status 404: Not Found"
    );
}

#[test]
fn test_aggregation_error_extensions() {
    let error = repo_scout_core::Error::aggregation(
        AggregationStep::WebhookListing,
        github_client::Error::HostRejected {
            status: 403,
            message: "Forbidden".to_string(),
        },
    );

    let gql = aggregation_error(&error);

    assert_eq!(
        extension(&gql, "code"),
        Some(serde_json::json!("HOST_REJECTED"))
    );
    assert_eq!(
        extension(&gql, "step"),
        Some(serde_json::json!("webhook listing"))
    );
    assert_eq!(extension(&gql, "status"), Some(serde_json::json!(403)));
}

#[test]
fn test_unavailable_host_has_no_status() {
    let error = repo_scout_core::Error::aggregation(
        AggregationStep::YamlContent,
        github_client::Error::HostUnavailable {
            message: "timed out".to_string(),
        },
    );

    let gql = aggregation_error(&error);

    assert_eq!(
        extension(&gql, "code"),
        Some(serde_json::json!("HOST_UNAVAILABLE"))
    );
    assert_eq!(extension(&gql, "status"), None);
}

#[test]
fn test_host_error_conversion() {
    let error = github_client::Error::ClientConfiguration("bad header".to_string());

    let gql = host_error(&error);

    assert_eq!(
        gql.message,
        "Failed to configure the repository host client: bad header"
    );
    assert_eq!(
        extension(&gql, "code"),
        Some(serde_json::json!("CLIENT_CONFIGURATION"))
    );
}

#[test]
fn test_config_error_message() {
    let error = ConfigError::InvalidValue {
        variable: "API_PORT".to_string(),
        value: "eighty".to_string(),
        reason: "invalid digit found in string".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid value 'eighty' for API_PORT: invalid digit found in string"
    );
}
