//! Interactive console writing to the process's standard streams.

use std::io::{self, Stderr, Stdout, Write};

use srcmove_core::{Console, ConsoleError, ConsoleResult, Severity, render_line};

/// Plain-text console for interactive use.
///
/// Warnings and errors go to the error stream, everything else to the
/// output stream. Verbose messages are dropped unless verbose mode is on.
pub struct TerminalConsole<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
    verbose: bool,
}

impl TerminalConsole {
    /// Console bound to stdout and stderr.
    pub fn stdio(verbose: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose)
    }
}

impl<O: Write, E: Write> TerminalConsole<O, E> {
    pub const fn with_writers(out: O, err: E, verbose: bool) -> Self {
        Self { out, err, verbose }
    }

    /// Give back the output and error writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Console for TerminalConsole<O, E> {
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()> {
        if severity == Severity::Verbose && !self.verbose {
            return Ok(());
        }
        let line = render_line(severity, text);
        let (stream, name): (&mut dyn Write, &str) = if severity.is_diagnostic() {
            (&mut self.err, "<stderr>")
        } else {
            (&mut self.out, "<stdout>")
        };
        writeln!(stream, "{line}")
            .and_then(|()| stream.flush())
            .map_err(|e| ConsoleError::io(name, e))
    }
}
