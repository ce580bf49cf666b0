//! GitHub client port definitions.
//!
//! This module defines the port trait and DTOs for read-only GitHub project
//! queries. The actual implementation lives in `srcmove-github`.

mod client;
mod error;
mod types;

pub use client::GithubApiPort;
pub use error::{GithubPortError, GithubPortResult};
pub use types::{Issue, Label, PullRequest, Revision, User};
