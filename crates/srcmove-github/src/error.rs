//! Internal error types for GitHub operations.
//!
//! These errors are internal to `srcmove-github` and are mapped to core port
//! errors at the boundary.

use srcmove_core::ProjectIdError;
use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;

/// Errors related to GitHub API operations.
#[derive(Debug, Error)]
pub enum GithubError {
    /// API request failed with an HTTP error status.
    #[error("GitHub API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The project identifier is not of the form `owner/repo`.
    #[error(transparent)]
    InvalidProject(#[from] ProjectIdError),

    /// Pull request and issue numbers start at 1.
    #[error("Invalid pull request or issue number: {0}")]
    InvalidNumber(u64),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
