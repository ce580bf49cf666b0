//! Request paths for the GitHub REST API.
//!
//! Paths are relative so they resolve against the configured API root.

use srcmove_core::ProjectId;

/// `repos/{owner}/{repo}/pulls`
pub fn pulls_path(project: &ProjectId) -> String {
    format!("repos/{project}/pulls")
}

/// `repos/{owner}/{repo}/pulls/{number}`
pub fn pull_path(project: &ProjectId, number: u64) -> String {
    format!("repos/{project}/pulls/{number}")
}

/// `repos/{owner}/{repo}/issues/{number}`
pub fn issue_path(project: &ProjectId, number: u64) -> String {
    format!("repos/{project}/issues/{number}")
}
