//! Named timing spans around API calls.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, debug, debug_span};

pub const PULLS_TASK: &str = "github_api/pulls";
pub const PULL_TASK: &str = "github_api/pulls/NUMBER";
pub const ISSUE_TASK: &str = "github_api/issues/NUMBER";

/// Run `fut` inside a span named after `task` and log how long it took.
pub async fn profiled<F: Future>(task: &'static str, fut: F) -> F::Output {
    let span = debug_span!("profiler_task", task);
    let start = Instant::now();
    let output = fut.instrument(span.clone()).await;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| debug!(task, elapsed_ms, "task finished"));
    output
}
