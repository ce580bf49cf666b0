//! Console capability trait.

use super::error::ConsoleResult;
use super::severity::Severity;

/// Port for user-facing console output.
///
/// Implementors provide [`Console::message`]; the named methods are the
/// capability set callers use. Instances are meant for single-threaded use:
/// methods take `&mut self` and no implementation in this workspace locks
/// internally.
pub trait Console {
    /// Emit one message.
    ///
    /// For [`Severity::Startup`], `text` is the version string and the
    /// implementation renders its own banner.
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()>;

    /// Announce the running version.
    fn startup_message(&mut self, version: &str) -> ConsoleResult<()> {
        self.message(Severity::Startup, version)
    }

    fn info(&mut self, text: &str) -> ConsoleResult<()> {
        self.message(Severity::Info, text)
    }

    fn warn(&mut self, text: &str) -> ConsoleResult<()> {
        self.message(Severity::Warning, text)
    }

    fn error(&mut self, text: &str) -> ConsoleResult<()> {
        self.message(Severity::Error, text)
    }

    fn verbose(&mut self, text: &str) -> ConsoleResult<()> {
        self.message(Severity::Verbose, text)
    }

    fn progress(&mut self, text: &str) -> ConsoleResult<()> {
        self.message(Severity::Progress, text)
    }
}

// Lets a wrapping console borrow a delegate it does not own.
impl<C: Console + ?Sized> Console for &mut C {
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()> {
        (**self).message(severity, text)
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()> {
        (**self).message(severity, text)
    }
}
