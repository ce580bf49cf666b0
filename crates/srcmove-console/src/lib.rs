//! Console implementations for srcmove.
//!
//! - [`TerminalConsole`]: the interactive console, writing to stdout/stderr.
//! - [`FileConsole`]: mirrors every message to a delegate console and to a
//!   [`BufferedFileSink`] that persists rendered lines to disk.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod file_console;
mod sink;
mod terminal;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// ============================================================================
// Public API
// ============================================================================

pub use config::FileConsoleConfig;
pub use file_console::FileConsole;
pub use sink::BufferedFileSink;
pub use terminal::TerminalConsole;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
