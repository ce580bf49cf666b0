//! Console capability set shared by interactive and file-backed consoles.
//!
//! The [`Console`] trait is the port every user-facing message goes through.
//! [`render_line`] is the single place that decides what a message looks
//! like once it is persisted.

mod error;
mod format;
mod port;
mod severity;

pub use error::{ConsoleError, ConsoleResult};
pub use format::{BANNER_PRODUCT, render_line, startup_banner};
pub use port::Console;
pub use severity::Severity;
