//! DTOs exposed through the GitHub port.

use serde::{Deserialize, Serialize};

/// Author of a pull request or issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Branch name
    pub reference: String,
    /// Commit SHA
    pub sha: String,
    /// `owner:branch` label, when the API provides one
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    /// `open` or `closed`
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    pub head: Revision,
    pub base: Revision,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    pub labels: Vec<Label>,
    pub user: Option<User>,
}

impl Issue {
    /// Label names, in API order.
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}
