//! CLI-specific error types and mappings.
//!
//! This module maps console and GitHub port errors to exit codes and
//! user-facing messages.

use srcmove_core::{ConsoleError, GithubPortError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Console output (terminal or file) failed.
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    /// GitHub query failed.
    #[error(transparent)]
    Github(#[from] GithubPortError),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 65: malformed input (`EX_DATAERR`)
    /// - 69: remote service unavailable or failing (`EX_UNAVAILABLE`)
    /// - 74: I/O error (`EX_IOERR`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Console(_) => 74,
            Self::Github(GithubPortError::Validation { .. }) => 65,
            Self::Github(_) => 69,
        }
    }
}
