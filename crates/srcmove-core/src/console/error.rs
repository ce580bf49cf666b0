//! Error types for console operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Errors raised by console implementations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The backing file could not be opened, written, or flushed.
    #[error("Console I/O error on {}: {source}", .path.display())]
    Io {
        /// Path of the file (or a descriptive pseudo-path for streams)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An operation was attempted after the sink was closed.
    #[error("Console sink for {} is already closed", .path.display())]
    Closed {
        /// Path the sink was bound to
        path: PathBuf,
    },
}

impl ConsoleError {
    /// Build an `Io` error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True if this error reports use after close.
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }
}
