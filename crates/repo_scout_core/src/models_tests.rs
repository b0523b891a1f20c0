use super::*;

fn repository(parent: Option<&str>) -> Repository {
    let mut json = serde_json::json!({
        "name": "widgets",
        "size": 2048,
        "private": true,
        "owner": { "login": "acme" }
    });
    if let Some(parent) = parent {
        json["parent"] = serde_json::json!({ "full_name": parent });
    }
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_summary_from_repository_without_parent() {
    let summary = RepositorySummary::from(repository(None));

    assert_eq!(summary.name, "widgets");
    assert_eq!(summary.size, 2048);
    assert_eq!(summary.owner, "acme");
    assert_eq!(summary.forked_from, None);
}

#[test]
fn test_summary_from_fork() {
    let summary = RepositorySummary::from(&repository(Some("upstream/widgets")));

    assert_eq!(summary.forked_from.as_deref(), Some("upstream/widgets"));
}
