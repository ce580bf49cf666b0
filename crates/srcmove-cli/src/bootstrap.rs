//! Composition root helpers: configuration, logging, and console wiring.

use srcmove_console::{FileConsole, FileConsoleConfig, TerminalConsole};
use srcmove_core::{Console, GithubApiPort};
use srcmove_github::{DefaultGithubApi, GithubClientConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::handlers;
use crate::parser::{Cli, Commands};

/// Runtime configuration derived from the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// File mirror for console output, if requested
    pub console_file: Option<FileConsoleConfig>,
    pub verbose: bool,
    pub github: GithubClientConfig,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            console_file: cli.console_file.as_ref().map(|path| {
                FileConsoleConfig::new(path).with_flush_threshold(cli.console_flush_rate)
            }),
            verbose: cli.verbose,
            github: GithubClientConfig::new().with_base_url(cli.github_url.clone()),
        }
    }
}

/// Install the diagnostics subscriber (`RUST_LOG`, default `warn`).
///
/// Diagnostics go to stderr and are separate from console output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a command against GitHub with a terminal console.
pub async fn run(config: &CliConfig, command: &Commands) -> Result<(), CliError> {
    let api = DefaultGithubApi::new(&config.github)?;
    let mut terminal = TerminalConsole::stdio(config.verbose);
    run_with(&api, &mut terminal, config, command).await
}

/// Run a command, mirroring `delegate` to the console file when configured.
///
/// The console file is closed (and its buffer flushed) even if the command
/// fails; the command's error wins over a close error.
pub async fn run_with<C: Console>(
    api: &dyn GithubApiPort,
    delegate: &mut C,
    config: &CliConfig,
    command: &Commands,
) -> Result<(), CliError> {
    debug!(?command, console_file = config.console_file.is_some(), "running command");
    let Some(file) = &config.console_file else {
        return handlers::execute(api, delegate, command).await;
    };

    let mut console = FileConsole::open(delegate, file)?;
    let result = handlers::execute(api, &mut console, command).await;
    let closed = console.close();
    result?;
    closed?;
    Ok(())
}
