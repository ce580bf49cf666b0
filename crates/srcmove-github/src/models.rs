//! Internal API response types for the GitHub REST API.
//!
//! These types mirror the JSON GitHub returns and are not exposed to
//! consumers. External consumers use the port DTOs defined in `srcmove-core`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
}

/// `head` / `base` object of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRevision {
    #[serde(rename = "ref")]
    pub reference: String,
    pub sha: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPullRequest {
    pub number: u64,
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    pub head: ApiRevision,
    pub base: ApiRevision,
    pub user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLabel {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiIssue {
    pub number: u64,
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<ApiLabel>,
    pub user: Option<ApiUser>,
}
