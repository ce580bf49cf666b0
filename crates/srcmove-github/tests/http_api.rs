//! End-to-end tests of `DefaultGithubApi` against a local mock HTTP server.

use mockito::{Matcher, Server};
use srcmove_core::{GithubApiPort, GithubPortError};
use srcmove_github::{DefaultGithubApi, GithubClientConfig};

const PULL_REQUEST: &str = r#"{
    "number": 42,
    "state": "open",
    "title": "Move sources",
    "body": null,
    "head": {"ref": "feature", "sha": "aaaaaaa", "label": "octocat:feature"},
    "base": {"ref": "main", "sha": "bbbbbbb", "label": "google:main"},
    "user": {"login": "octocat"}
}"#;

fn api_for(server: &Server) -> DefaultGithubApi {
    let config = GithubClientConfig::new()
        .with_base_url(server.url())
        .with_user_agent("srcmove-tests");
    DefaultGithubApi::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_pull_requests() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/google/copybara/pulls")
        .match_header("user-agent", "srcmove-tests")
        .match_header("accept", "application/vnd.github+json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{PULL_REQUEST}]"))
        .create_async()
        .await;

    let prs = api_for(&server)
        .get_pull_requests("google/copybara")
        .await
        .unwrap();

    assert_eq!(prs.len(), 1);
    assert_eq!(prs[0].number, 42);
    assert_eq!(prs[0].head.sha, "aaaaaaa");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_pull_request_and_issue() {
    let mut server = Server::new_async().await;
    let pr_mock = server
        .mock("GET", "/repos/google/copybara/pulls/42")
        .with_status(200)
        .with_body(PULL_REQUEST)
        .create_async()
        .await;
    let issue_mock = server
        .mock("GET", "/repos/google/copybara/issues/42")
        .with_status(200)
        .with_body(r#"{"number": 42, "state": "open", "title": "Move sources", "labels": [{"name": "ready"}]}"#)
        .create_async()
        .await;

    let api = api_for(&server);
    let pr = api.get_pull_request("google/copybara", 42).await.unwrap();
    let issue = api.get_issue("google/copybara", pr.number).await.unwrap();

    assert_eq!(pr.title, issue.title);
    assert!(issue.has_label("ready"));
    pr_mock.assert_async().await;
    issue_mock.assert_async().await;
}

#[tokio::test]
async fn test_http_failures_are_repository_access_errors() {
    let mut server = Server::new_async().await;
    let _missing = server
        .mock("GET", "/repos/google/copybara/pulls/7")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;
    let _broken = server
        .mock("GET", "/repos/google/copybara/pulls")
        .with_status(500)
        .create_async()
        .await;

    let api = api_for(&server);

    let err = api.get_pull_request("google/copybara", 7).await.unwrap_err();
    assert!(matches!(err, GithubPortError::NotFound { .. }));
    assert!(err.is_repository_access());

    let err = api.get_pull_requests("google/copybara").await.unwrap_err();
    assert!(matches!(err, GithubPortError::RepositoryAccess { .. }));
}

#[tokio::test]
async fn test_invalid_identifiers_never_reach_the_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let api = api_for(&server);
    assert!(api.get_pull_requests("no-slash").await.unwrap_err().is_validation());
    assert!(api.get_issue("google/copybara", 0).await.unwrap_err().is_validation());
    mock.assert_async().await;
}
