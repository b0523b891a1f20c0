use super::*;
use serde_json::from_str;

#[test]
fn test_repository_deserialization_without_parent() {
    let json_str = r#"{
        "id": 1296269,
        "name": "hello-world",
        "full_name": "octocat/hello-world",
        "size": 108,
        "private": true,
        "owner": { "login": "octocat", "id": 1 }
    }"#;

    let repo: Repository = from_str(json_str).expect("Failed to deserialize Repository");

    assert_eq!(repo.name, "hello-world");
    assert_eq!(repo.size, 108);
    assert!(repo.private);
    assert_eq!(repo.owner_login(), "octocat");
    assert_eq!(repo.forked_from(), None);
}

#[test]
fn test_repository_deserialization_with_parent() {
    let json_str = r#"{
        "name": "hello-world",
        "size": 12,
        "private": false,
        "owner": { "login": "fork-owner" },
        "parent": { "name": "hello-world", "full_name": "octocat/hello-world" }
    }"#;

    let repo: Repository = from_str(json_str).expect("Failed to deserialize Repository");

    assert_eq!(repo.forked_from(), Some("octocat/hello-world"));
}

#[test]
fn test_repository_null_parent_is_not_a_fork() {
    let json_str = r#"{
        "name": "solo",
        "size": 0,
        "owner": { "login": "someone" },
        "parent": null
    }"#;

    let repo: Repository = from_str(json_str).expect("Failed to deserialize Repository");

    assert!(!repo.private);
    assert_eq!(repo.forked_from(), None);
}

#[test]
fn test_repository_missing_owner_is_rejected() {
    let json_str = r#"{ "name": "orphan", "size": 1 }"#;

    assert!(from_str::<Repository>(json_str).is_err());
}
