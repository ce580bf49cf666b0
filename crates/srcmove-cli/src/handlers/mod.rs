//! Command handlers.
//!
//! Handlers report through a [`Console`] and query GitHub through the
//! [`GithubApiPort`], so they never touch a terminal or the network directly.

mod github;

use srcmove_core::{Console, GithubApiPort};
use tracing::warn;

use crate::VERSION;
use crate::error::CliError;
use crate::parser::Commands;

/// Announce the version, run `command`, and report GitHub failures on the
/// console before returning them.
pub async fn execute<C: Console>(
    api: &dyn GithubApiPort,
    console: &mut C,
    command: &Commands,
) -> Result<(), CliError> {
    console.startup_message(VERSION)?;

    let result = match command {
        Commands::Pulls { project } => github::list_pulls(api, console, project).await,
        Commands::Pull { project, number } => {
            github::show_pull(api, console, project, *number).await
        }
        Commands::Labels { project, number } => {
            github::show_labels(api, console, project, *number).await
        }
    };

    if let Err(CliError::Github(err)) = &result {
        if let Err(echo) = console.error(&err.to_string()) {
            warn!(error = %echo, "could not report GitHub failure on the console");
        }
    }
    result
}
