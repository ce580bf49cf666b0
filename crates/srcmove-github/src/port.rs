//! Port trait implementation for `GithubApi`.
//!
//! This module implements the core-owned `GithubApiPort` trait, validating
//! request parameters and converting between GitHub wire types and core DTOs.

use async_trait::async_trait;
use srcmove_core::{
    GithubApiPort, GithubPortError, GithubPortResult, Issue, Label, ProjectId, PullRequest,
    Revision, User,
};

use crate::client::GithubApi;
use crate::error::{GithubError, GithubResult};
use crate::models::{ApiIssue, ApiLabel, ApiPullRequest, ApiRevision, ApiUser};
use crate::transport::GithubTransport;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `GithubError` to core `GithubPortError`.
pub(crate) fn map_error(err: GithubError) -> GithubPortError {
    match err {
        GithubError::ApiRequestFailed { status: 404, url } => {
            GithubPortError::NotFound { resource: url }
        }
        GithubError::ApiRequestFailed { status, url } => GithubPortError::RepositoryAccess {
            message: format!("API request failed with status {status}: {url}"),
        },
        e @ (GithubError::InvalidProject(_)
        | GithubError::InvalidNumber(_)
        | GithubError::InvalidUrl(_)) => GithubPortError::Validation {
            message: e.to_string(),
        },
        GithubError::Network(e) => GithubPortError::RepositoryAccess {
            message: e.to_string(),
        },
        GithubError::JsonParse(e) => GithubPortError::RepositoryAccess {
            message: format!("Invalid response from GitHub: {e}"),
        },
    }
}

// ============================================================================
// Validation
// ============================================================================

fn parse_project(project_id: &str) -> GithubResult<ProjectId> {
    Ok(ProjectId::parse(project_id)?)
}

fn check_number(number: u64) -> GithubResult<u64> {
    if number == 0 {
        Err(GithubError::InvalidNumber(number))
    } else {
        Ok(number)
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_user(user: ApiUser) -> User {
    User { login: user.login }
}

fn to_revision(revision: ApiRevision) -> Revision {
    Revision {
        reference: revision.reference,
        sha: revision.sha,
        label: revision.label,
    }
}

fn to_pull_request(pr: ApiPullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        state: pr.state,
        title: pr.title,
        body: pr.body,
        head: to_revision(pr.head),
        base: to_revision(pr.base),
        user: pr.user.map(to_user),
    }
}

fn to_label(label: ApiLabel) -> Label {
    Label {
        name: label.name,
        color: label.color,
    }
}

fn to_issue(issue: ApiIssue) -> Issue {
    Issue {
        number: issue.number,
        state: issue.state,
        title: issue.title,
        body: issue.body,
        labels: issue.labels.into_iter().map(to_label).collect(),
        user: issue.user.map(to_user),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<T: GithubTransport> GithubApiPort for GithubApi<T> {
    async fn get_pull_requests(&self, project_id: &str) -> GithubPortResult<Vec<PullRequest>> {
        let project = parse_project(project_id).map_err(map_error)?;
        let prs = self.pull_requests(&project).await.map_err(map_error)?;
        Ok(prs.into_iter().map(to_pull_request).collect())
    }

    async fn get_pull_request(
        &self,
        project_id: &str,
        number: u64,
    ) -> GithubPortResult<PullRequest> {
        let project = parse_project(project_id).map_err(map_error)?;
        let number = check_number(number).map_err(map_error)?;
        let pr = self.pull_request(&project, number).await.map_err(map_error)?;
        Ok(to_pull_request(pr))
    }

    async fn get_issue(&self, project_id: &str, number: u64) -> GithubPortResult<Issue> {
        let project = parse_project(project_id).map_err(map_error)?;
        let number = check_number(number).map_err(map_error)?;
        let issue = self.issue(&project, number).await.map_err(map_error)?;
        Ok(to_issue(issue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::FakeTransport;
    use serde_json::json;

    fn pr_json(number: u64, title: &str) -> serde_json::Value {
        json!({
            "number": number,
            "state": "open",
            "title": title,
            "body": "Imported from upstream",
            "head": {"ref": "feature", "sha": "1111111", "label": "octocat:feature"},
            "base": {"ref": "main", "sha": "2222222", "label": "google:main"},
            "user": {"login": "octocat"}
        })
    }

    fn client(transport: FakeTransport) -> GithubApi<FakeTransport> {
        GithubApi::with_transport(transport)
    }

    #[tokio::test]
    async fn test_get_pull_requests_preserves_order() {
        let api = client(FakeTransport::new().with_json(
            "repos/google/copybara/pulls",
            json!([pr_json(7, "seven"), pr_json(3, "three"), pr_json(5, "five")]),
        ));

        let prs = api.get_pull_requests("google/copybara").await.unwrap();
        let numbers: Vec<_> = prs.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![7, 3, 5]);
        assert_eq!(prs[0].head.reference, "feature");
        assert_eq!(prs[0].base.label.as_deref(), Some("google:main"));
        assert_eq!(prs[0].user.as_ref().unwrap().login, "octocat");
    }

    #[tokio::test]
    async fn test_get_pull_request() {
        let api = client(
            FakeTransport::new().with_json("repos/google/copybara/pulls/12", pr_json(12, "twelve")),
        );

        let pr = api.get_pull_request("google/copybara", 12).await.unwrap();
        assert_eq!(pr.number, 12);
        assert_eq!(pr.title, "twelve");
        assert_eq!(pr.body.as_deref(), Some("Imported from upstream"));
    }

    #[tokio::test]
    async fn test_get_issue_reads_labels() {
        let api = client(FakeTransport::new().with_json(
            "repos/google/copybara/issues/12",
            json!({
                "number": 12,
                "state": "open",
                "title": "twelve",
                "labels": [{"name": "import: ready", "color": "00ff00"}, {"name": "bug"}]
            }),
        ));

        let issue = api.get_issue("google/copybara", 12).await.unwrap();
        assert_eq!(issue.label_names(), vec!["import: ready", "bug"]);
        assert_eq!(issue.labels[0].color.as_deref(), Some("00ff00"));
    }

    #[tokio::test]
    async fn test_invalid_project_fails_before_request() {
        let api = client(FakeTransport::new());

        for bad in ["copybara", "google/copybara/extra", "", "google/ copybara"] {
            let err = api.get_pull_requests(bad).await.unwrap_err();
            assert!(err.is_validation(), "{bad:?}: {err}");
        }
        assert!(api.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_zero_number_fails_before_request() {
        let api = client(FakeTransport::new());

        assert!(api.get_pull_request("google/copybara", 0).await.unwrap_err().is_validation());
        assert!(api.get_issue("google/copybara", 0).await.unwrap_err().is_validation());
        assert!(api.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_pull_request_is_not_found() {
        let api = client(FakeTransport::new());

        match api.get_pull_request("google/copybara", 99).await {
            Err(GithubPortError::NotFound { resource }) => {
                assert!(resource.ends_with("repos/google/copybara/pulls/99"));
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_repository_access() {
        let api = client(FakeTransport::new().with_status("repos/google/copybara/pulls", 502));

        let err = api.get_pull_requests("google/copybara").await.unwrap_err();
        assert!(matches!(err, GithubPortError::RepositoryAccess { .. }));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_repository_access() {
        let api = client(FakeTransport::new().with_json(
            "repos/google/copybara/issues/1",
            json!({"number": "one"}),
        ));

        let err = api.get_issue("google/copybara", 1).await.unwrap_err();
        assert!(matches!(err, GithubPortError::RepositoryAccess { .. }));
    }

    #[test]
    fn test_map_error_validation_variants() {
        assert!(map_error(GithubError::InvalidNumber(0)).is_validation());
        let parse_err = url::Url::parse("nope").unwrap_err();
        assert!(map_error(GithubError::InvalidUrl(parse_err)).is_validation());
    }
}
