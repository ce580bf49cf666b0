//! GitHub client port trait.

use super::error::GithubPortResult;
use super::types::{Issue, PullRequest};
use async_trait::async_trait;

/// Port trait for read-only GitHub project queries.
///
/// Projects are addressed as `owner/repo` (e.g. `google/copybara`).
///
/// # Design
///
/// - Uses core-owned DTOs, not GitHub wire types
/// - Returns `GithubPortError` for all failures
/// - Malformed identifiers are rejected before any request is made
#[async_trait]
pub trait GithubApiPort: Send + Sync {
    /// List the pull requests of a project, in the order the API returns them.
    async fn get_pull_requests(&self, project_id: &str) -> GithubPortResult<Vec<PullRequest>>;

    /// Fetch a single pull request by number.
    async fn get_pull_request(
        &self,
        project_id: &str,
        number: u64,
    ) -> GithubPortResult<PullRequest>;

    /// Fetch a single issue by number.
    ///
    /// Pull requests and issues share a numbering space, so this is how the
    /// labels of a pull request are read.
    async fn get_issue(&self, project_id: &str, number: u64) -> GithubPortResult<Issue>;
}
