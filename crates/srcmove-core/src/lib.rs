//! Core domain types and port definitions for srcmove.
//!
//! This crate owns the vocabulary shared by every adapter: the console
//! capability set and its line format, and the read-only GitHub port with
//! its DTOs. It performs no I/O.
#![deny(unused_crate_dependencies)]

pub mod console;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use console::{
    BANNER_PRODUCT, Console, ConsoleError, ConsoleResult, Severity, render_line, startup_banner,
};
pub use domain::{ProjectId, ProjectIdError};
pub use ports::github::{
    GithubApiPort, GithubPortError, GithubPortResult, Issue, Label, PullRequest, Revision, User,
};

// Silence unused dev-dependency warnings for crates only used by integration tests
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
