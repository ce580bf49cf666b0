//! srcmove command-line interface.
//!
//! The binary in `main.rs` is the composition root; this library holds the
//! argument parser, error mapping, and command handlers so they can be
//! tested without a terminal or network.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliConfig, init_tracing, run};
pub use error::CliError;
pub use parser::{Cli, Commands};

/// Version reported in the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
