//! Public configuration for file-backed consoles.

use std::path::{Path, PathBuf};

/// Configuration for a [`FileConsole`](crate::FileConsole).
///
/// # Example
///
/// ```
/// use srcmove_console::FileConsoleConfig;
///
/// let config = FileConsoleConfig::new("/tmp/srcmove.log").with_flush_threshold(50);
/// assert_eq!(config.flush_threshold(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConsoleConfig {
    /// File the console output is persisted to (truncated on open)
    pub(crate) path: PathBuf,
    /// Buffered lines that trigger a write; 0 means only on close
    pub(crate) flush_threshold: usize,
}

impl FileConsoleConfig {
    /// Create a configuration that only flushes on close.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            flush_threshold: 0,
        }
    }

    /// Flush whenever this many lines have been buffered since the last flush.
    ///
    /// Defaults to 0 (flush on close only).
    #[must_use]
    pub const fn with_flush_threshold(mut self, lines: usize) -> Self {
        self.flush_threshold = lines;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn flush_threshold(&self) -> usize {
        self.flush_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConsoleConfig::new("/tmp/console.log");
        assert_eq!(config.path(), Path::new("/tmp/console.log"));
        assert_eq!(config.flush_threshold(), 0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = FileConsoleConfig::new(PathBuf::from("out.log")).with_flush_threshold(5);
        assert_eq!(config.flush_threshold(), 5);
        assert_eq!(config.path(), Path::new("out.log"));
    }
}
