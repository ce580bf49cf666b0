//! Integration tests for the public port surface of `srcmove-core`.
//!
//! Exercises the console trait and the GitHub port through trait objects,
//! the way adapters consume them.

use async_trait::async_trait;
use srcmove_core::{
    Console, ConsoleResult, GithubApiPort, GithubPortError, GithubPortResult, Issue, PullRequest,
    Revision, Severity, render_line,
};

#[derive(Default)]
struct LineCollector {
    lines: Vec<String>,
}

impl Console for LineCollector {
    fn message(&mut self, severity: Severity, text: &str) -> ConsoleResult<()> {
        self.lines.push(render_line(severity, text));
        Ok(())
    }
}

#[test]
fn test_console_trait_object_renders_every_severity() {
    let mut collector = LineCollector::default();
    {
        let console: &mut dyn Console = &mut collector;
        console.startup_message("v1").unwrap();
        console.info("This is info").unwrap();
        console.warn("This is warning").unwrap();
        console.error("This is error").unwrap();
        console.verbose("This is verbose").unwrap();
        console.progress("This is progress").unwrap();
    }

    assert_eq!(
        collector.lines,
        vec![
            "INFO: Copybara source mover (Version: v1)",
            "INFO: This is info",
            "WARNING: This is warning",
            "ERROR: This is error",
            "VERBOSE: This is verbose",
            "PROGRESS: This is progress",
        ]
    );
}

struct SinglePullRequest;

fn revision(reference: &str) -> Revision {
    Revision {
        reference: reference.to_string(),
        sha: "0123456789abcdef".to_string(),
        label: None,
    }
}

#[async_trait]
impl GithubApiPort for SinglePullRequest {
    async fn get_pull_requests(&self, project_id: &str) -> GithubPortResult<Vec<PullRequest>> {
        Ok(vec![self.get_pull_request(project_id, 1).await?])
    }

    async fn get_pull_request(
        &self,
        _project_id: &str,
        number: u64,
    ) -> GithubPortResult<PullRequest> {
        if number != 1 {
            return Err(GithubPortError::NotFound {
                resource: format!("pulls/{number}"),
            });
        }
        Ok(PullRequest {
            number,
            state: "open".to_string(),
            title: "Only PR".to_string(),
            body: None,
            head: revision("feature"),
            base: revision("main"),
            user: None,
        })
    }

    async fn get_issue(&self, _project_id: &str, number: u64) -> GithubPortResult<Issue> {
        Err(GithubPortError::NotFound {
            resource: format!("issues/{number}"),
        })
    }
}

#[tokio::test]
async fn test_github_port_through_trait_object() {
    let port: Box<dyn GithubApiPort> = Box::new(SinglePullRequest);

    let prs = port.get_pull_requests("google/copybara").await.unwrap();
    assert_eq!(prs.len(), 1);
    assert_eq!(prs[0].head.reference, "feature");

    let err = port.get_issue("google/copybara", 1).await.unwrap_err();
    assert!(err.is_repository_access());
}

#[test]
fn test_dtos_serialize_with_field_names() {
    let value = serde_json::to_value(revision("main")).unwrap();
    assert_eq!(value["reference"], "main");
    assert!(value["label"].is_null());
}
