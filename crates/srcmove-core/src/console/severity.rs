//! Message severities understood by every console.

use std::fmt;

/// Severity of a console message.
///
/// `Startup` is not a level of its own on the wire: it is rendered as an
/// `INFO` line carrying the startup banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Startup,
    Info,
    Warning,
    Error,
    Verbose,
    Progress,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Startup,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Verbose,
        Self::Progress,
    ];

    /// Upper-case label used as the line prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup | Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Verbose => "VERBOSE",
            Self::Progress => "PROGRESS",
        }
    }

    /// Whether interactive consoles should send this to the error stream.
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
