//! GitHub client for reading pull requests and issues.

use srcmove_core::{GithubPortResult, ProjectId};
use tracing::debug;

use crate::config::GithubClientConfig;
use crate::error::GithubResult;
use crate::models::{ApiIssue, ApiPullRequest};
use crate::paths::{issue_path, pull_path, pulls_path};
use crate::port::map_error;
use crate::profiler::{ISSUE_TASK, PULL_TASK, PULLS_TASK, profiled};
use crate::transport::{GithubTransport, ReqwestTransport};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default GitHub client using the reqwest transport.
pub type DefaultGithubApi = GithubApi<ReqwestTransport>;

// ============================================================================
// Client
// ============================================================================

/// Client for the read-only GitHub project surface.
///
/// Generic over its transport so tests can inject canned responses. Use
/// [`DefaultGithubApi`] in production code.
pub struct GithubApi<T: GithubTransport> {
    pub(crate) transport: T,
}

impl DefaultGithubApi {
    /// Create a new client with the given configuration.
    ///
    /// Fails with a validation error if the configured API root is not a URL.
    pub fn new(config: &GithubClientConfig) -> GithubPortResult<Self> {
        let transport = ReqwestTransport::new(config).map_err(map_error)?;
        debug!(base_url = %transport.base_url(), "created GitHub client");
        Ok(Self::with_transport(transport))
    }
}

impl<T: GithubTransport> GithubApi<T> {
    /// Create a client over a custom transport.
    pub(crate) const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// All pull requests of a project.
    pub(crate) async fn pull_requests(
        &self,
        project: &ProjectId,
    ) -> GithubResult<Vec<ApiPullRequest>> {
        profiled(PULLS_TASK, self.transport.get(&pulls_path(project))).await
    }

    /// One pull request by number.
    pub(crate) async fn pull_request(
        &self,
        project: &ProjectId,
        number: u64,
    ) -> GithubResult<ApiPullRequest> {
        profiled(PULL_TASK, self.transport.get(&pull_path(project, number))).await
    }

    /// One issue by number. Used to read the labels of a pull request.
    pub(crate) async fn issue(&self, project: &ProjectId, number: u64) -> GithubResult<ApiIssue> {
        profiled(ISSUE_TASK, self.transport.get(&issue_path(project, number))).await
    }
}
