//! Error types for GitHub port operations.

use thiserror::Error;

/// Errors from GitHub port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum GithubPortError {
    /// The repository could not be reached or answered with a failure.
    #[error("Repository access error: {message}")]
    RepositoryAccess {
        /// Description of the failure
        message: String,
    },

    /// The requested pull request, issue, or project does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// API path of the missing resource
        resource: String,
    },

    /// The request parameters were malformed.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the request
        message: String,
    },
}

impl GithubPortError {
    /// True for failures reported by the remote side or the transport.
    pub const fn is_repository_access(&self) -> bool {
        matches!(self, Self::RepositoryAccess { .. } | Self::NotFound { .. })
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for GitHub port operations.
pub type GithubPortResult<T> = Result<T, GithubPortError>;
