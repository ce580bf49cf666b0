//! Line rendering for persisted console output.
//!
//! Pure functions only. Text is taken as-is: no escaping, no truncation.

use super::severity::Severity;

/// Product name embedded in the startup banner.
pub const BANNER_PRODUCT: &str = "Copybara source mover";

/// Banner text announcing the running version.
pub fn startup_banner(version: &str) -> String {
    format!("{BANNER_PRODUCT} (Version: {version})")
}

/// Render a message as a single `"<LABEL>: <text>"` line.
///
/// For [`Severity::Startup`] the text is the version string and the rendered
/// line carries the startup banner instead.
pub fn render_line(severity: Severity, text: &str) -> String {
    match severity {
        Severity::Startup => format!("{}: {}", severity.label(), startup_banner(text)),
        _ => format!("{}: {text}", severity.label()),
    }
}
