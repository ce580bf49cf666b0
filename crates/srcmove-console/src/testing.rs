//! Recording console for tests.
//!
//! Available to other crates with the `test-utils` feature.

use std::io;

use regex::Regex;
use srcmove_core::{Console, ConsoleError, ConsoleResult, Severity, startup_banner};

/// A message as the testing console received it.
///
/// Startup messages are recorded the way an interactive console shows them:
/// as `Info` carrying the banner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    pub severity: Severity,
    pub text: String,
}

/// Console that records everything and can be told to fail.
#[derive(Debug, Default)]
pub struct TestingConsole {
    messages: Vec<RecordedMessage>,
    fail_on: Vec<Severity>,
}

impl TestingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make messages of `severity` fail after being recorded.
    #[must_use]
    pub fn failing_on(mut self, severity: Severity) -> Self {
        self.fail_on.push(severity);
        self
    }

    pub fn messages(&self) -> &[RecordedMessage] {
        &self.messages
    }

    /// Start an ordered assertion over the recorded messages.
    pub fn assert_that(&self) -> MessageAssertions<'_> {
        MessageAssertions {
            messages: &self.messages,
            next: 0,
        }
    }
}

impl Console for TestingConsole {
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()> {
        let recorded = match severity {
            Severity::Startup => RecordedMessage {
                severity: Severity::Info,
                text: startup_banner(text),
            },
            _ => RecordedMessage {
                severity,
                text: text.to_string(),
            },
        };
        self.messages.push(recorded);

        if self.fail_on.contains(&severity) {
            return Err(ConsoleError::io(
                "<testing console>",
                io::Error::other(format!("{severity} messages are set to fail")),
            ));
        }
        Ok(())
    }
}

/// Ordered checks over recorded messages. Panics on mismatch.
pub struct MessageAssertions<'a> {
    messages: &'a [RecordedMessage],
    next: usize,
}

impl MessageAssertions<'_> {
    /// The next message must have `severity` and text fully matching `pattern`.
    #[must_use]
    pub fn matches_next(mut self, severity: Severity, pattern: &str) -> Self {
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .unwrap_or_else(|e| panic!("invalid pattern {pattern:?}: {e}"));
        let Some(message) = self.messages.get(self.next) else {
            panic!(
                "expected {severity} message matching {pattern:?} at index {}, \
                 but only {} messages were recorded",
                self.next,
                self.messages.len()
            );
        };
        assert!(
            message.severity == severity && regex.is_match(&message.text),
            "expected {severity} message matching {pattern:?} at index {}, got {message:?}",
            self.next
        );
        self.next += 1;
        self
    }

    /// Every recorded message has been matched.
    pub fn contains_no_more_messages(self) {
        assert!(
            self.next == self.messages.len(),
            "unexpected extra messages: {:?}",
            &self.messages[self.next..]
        );
    }
}
