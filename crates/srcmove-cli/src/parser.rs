//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "srcmove", version, about = "Copybara source mover helpers")]
pub struct Cli {
    /// Also write console output to this file (truncated on start)
    #[arg(long, global = true, env = "SRCMOVE_CONSOLE_FILE")]
    pub console_file: Option<PathBuf>,

    /// Flush the console file every N messages (0 = only on exit)
    #[arg(long, global = true, env = "SRCMOVE_CONSOLE_FLUSH_RATE", default_value_t = 0)]
    pub console_flush_rate: usize,

    /// Show verbose messages on the terminal
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// GitHub REST API root
    #[arg(
        long,
        global = true,
        env = "SRCMOVE_GITHUB_URL",
        default_value = "https://api.github.com/"
    )]
    pub github_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List the pull requests of a project
    Pulls {
        /// Project in the form owner/repo
        project: String,
    },
    /// Show one pull request and its labels
    Pull {
        /// Project in the form owner/repo
        project: String,
        /// Pull request number
        number: u64,
    },
    /// Show the labels of an issue or pull request
    Labels {
        /// Project in the form owner/repo
        project: String,
        /// Issue or pull request number
        number: u64,
    },
}
