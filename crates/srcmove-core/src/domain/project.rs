//! GitHub project identifiers (`owner/repo`).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a project identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectIdError {
    #[error("project '{0}' must have the form 'owner/repo'")]
    Shape(String),

    #[error("project '{0}' must not contain whitespace")]
    Whitespace(String),
}

/// A validated `owner/repo` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId {
    owner: String,
    repo: String,
}

impl ProjectId {
    /// Parse and validate a project identifier such as `google/copybara`.
    pub fn parse(value: &str) -> Result<Self, ProjectIdError> {
        if value.chars().any(char::is_whitespace) {
            return Err(ProjectIdError::Whitespace(value.to_string()));
        }
        let mut parts = value.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ProjectIdError::Shape(value.to_string())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for ProjectId {
    type Err = ProjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
