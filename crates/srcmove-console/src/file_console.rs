//! Console that mirrors every message to a delegate and to a file.

use std::fs::File;
use std::io::Write;

use srcmove_core::{Console, ConsoleError, ConsoleResult, Severity, render_line};

use crate::config::FileConsoleConfig;
use crate::sink::BufferedFileSink;

/// Dual-output console.
///
/// Each message is forwarded to the delegate immediately, then rendered and
/// appended to the sink. The delegate is never closed by this type; pass
/// `&mut delegate` to keep ownership with the caller.
///
/// The sink is closed by [`FileConsole::close`], or on drop if the console
/// goes out of scope without being closed (errors are then only logged).
/// Prefer [`FileConsole::scoped`] to have close errors returned.
pub struct FileConsole<C: Console, W: Write = File> {
    delegate: C,
    sink: BufferedFileSink<W>,
}

impl<C: Console> FileConsole<C> {
    /// Open the configured file (truncating it) and wrap `delegate`.
    pub fn open(delegate: C, config: &FileConsoleConfig) -> ConsoleResult<Self> {
        let sink = BufferedFileSink::open(&config.path, config.flush_threshold)?;
        Ok(Self::with_sink(delegate, sink))
    }

    /// Run `f` with an open console and close it afterwards, whatever `f`
    /// returned.
    ///
    /// An error from `f` takes precedence over an error from closing.
    pub fn scoped<T, E, F>(delegate: C, config: &FileConsoleConfig, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<ConsoleError>,
    {
        let mut console = Self::open(delegate, config)?;
        let result = f(&mut console);
        let closed = console.close();
        let value = result?;
        closed?;
        Ok(value)
    }
}

impl<C: Console, W: Write> FileConsole<C, W> {
    pub const fn with_sink(delegate: C, sink: BufferedFileSink<W>) -> Self {
        Self { delegate, sink }
    }

    pub const fn delegate(&self) -> &C {
        &self.delegate
    }

    pub const fn sink(&self) -> &BufferedFileSink<W> {
        &self.sink
    }

    /// Flush buffered lines without closing.
    pub fn flush(&mut self) -> ConsoleResult<()> {
        self.sink.flush()
    }

    /// Force the final flush and release the file. The delegate is returned
    /// untouched.
    ///
    /// On failure the console is consumed and the lines that could not be
    /// written are discarded without another attempt.
    pub fn close(mut self) -> ConsoleResult<C> {
        self.sink.close()?;
        Ok(self.delegate)
    }
}

impl<C: Console, W: Write> Console for FileConsole<C, W> {
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()> {
        let forwarded = self.delegate.message(severity, text);
        let appended = self.sink.append(render_line(severity, text));
        forwarded.and(appended)
    }
}
