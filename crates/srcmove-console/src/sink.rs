//! Buffered line sink backed by a file.
//!
//! Lines are kept in memory and written out in one go, either when the
//! configured threshold is reached or when the sink is closed. A failed
//! write keeps the unwritten lines; the next attempt resumes after the last
//! byte that reached the writer, so nothing is written twice.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use srcmove_core::{ConsoleError, ConsoleResult};
use tracing::{debug, warn};

/// Append-only line buffer that persists to a single file.
///
/// `W` is the underlying writer; production code uses [`File`] via
/// [`BufferedFileSink::open`]. Not safe for unsynchronized concurrent use.
pub struct BufferedFileSink<W: Write = File> {
    path: PathBuf,
    /// `None` once closed
    writer: Option<W>,
    buffer: Vec<String>,
    /// Bytes of the rendered buffer already accepted by the writer
    written: usize,
    flush_threshold: usize,
    /// An explicit `close` failed; drop must not write again
    close_failed: bool,
}

impl BufferedFileSink<File> {
    /// Create (or truncate) the file at `path`.
    ///
    /// A `flush_threshold` of 0 buffers everything until [`close`](Self::close).
    pub fn open(path: impl AsRef<Path>, flush_threshold: usize) -> ConsoleResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ConsoleError::io(path, e))?;
        debug!(path = %path.display(), flush_threshold, "opened console file");
        Ok(Self::from_writer(path, file, flush_threshold))
    }
}

impl<W: Write> BufferedFileSink<W> {
    /// Wrap an already-open writer. `path` is only used in errors and logs.
    pub fn from_writer(path: impl Into<PathBuf>, writer: W, flush_threshold: usize) -> Self {
        Self {
            path: path.into(),
            writer: Some(writer),
            buffer: Vec::new(),
            written: 0,
            flush_threshold,
            close_failed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn flush_threshold(&self) -> usize {
        self.flush_threshold
    }

    /// Lines appended since the last successful flush.
    pub fn buffered_lines(&self) -> usize {
        self.buffer.len()
    }

    pub const fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn closed_error(&self) -> ConsoleError {
        ConsoleError::Closed {
            path: self.path.clone(),
        }
    }

    /// Buffer one rendered line, flushing if the threshold is reached.
    pub fn append(&mut self, line: impl Into<String>) -> ConsoleResult<()> {
        if !self.is_open() {
            return Err(self.closed_error());
        }
        self.buffer.push(line.into());
        if self.flush_threshold > 0 && self.buffer.len() >= self.flush_threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Write every buffered line, in order, then clear the buffer.
    ///
    /// No-op when nothing is buffered. On failure the lines are kept and a
    /// later flush continues from where the writer stopped.
    pub fn flush(&mut self) -> ConsoleResult<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(self.closed_error());
        };
        if self.buffer.is_empty() {
            return Ok(());
        }

        let size = self.buffer.iter().map(|line| line.len() + 1).sum();
        let mut chunk = String::with_capacity(size);
        for line in &self.buffer {
            chunk.push_str(line);
            chunk.push('\n');
        }

        let mut remaining = &chunk.as_bytes()[self.written..];
        while !remaining.is_empty() {
            match writer.write(remaining) {
                Ok(0) => {
                    return Err(ConsoleError::io(
                        &self.path,
                        io::Error::from(io::ErrorKind::WriteZero),
                    ));
                }
                Ok(n) => {
                    self.written += n;
                    remaining = &remaining[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(ConsoleError::io(&self.path, e)),
            }
        }

        let lines = self.buffer.len();
        self.buffer.clear();
        self.written = 0;
        writer.flush().map_err(|e| ConsoleError::io(&self.path, e))?;

        debug!(path = %self.path.display(), lines, "flushed console buffer");
        Ok(())
    }

    /// Flush whatever is left and release the writer.
    ///
    /// If the final flush fails the sink stays open and `close` may be called
    /// again. A sink dropped after a failed close does not write again; the
    /// lines still buffered are reported lost. Closing twice fails with
    /// [`ConsoleError::Closed`].
    pub fn close(&mut self) -> ConsoleResult<()> {
        if let Err(err) = self.flush() {
            self.close_failed = self.is_open();
            return Err(err);
        }
        self.close_failed = false;
        self.writer = None;
        Ok(())
    }
}

impl<W: Write> Drop for BufferedFileSink<W> {
    fn drop(&mut self) {
        if !self.is_open() {
            return;
        }
        if self.close_failed {
            warn!(
                path = %self.path.display(),
                lost_lines = self.buffer.len(),
                "console file dropped after a failed close"
            );
            return;
        }
        if let Err(err) = self.close() {
            warn!(
                path = %self.path.display(),
                lost_lines = self.buffer.len(),
                error = %err,
                "failed to flush console buffer on drop"
            );
        }
    }
}
