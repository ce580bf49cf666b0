//! GitHub query commands.

use srcmove_core::{Console, GithubApiPort, Issue, PullRequest};

use crate::error::CliError;

fn headline(pr: &PullRequest) -> String {
    format!("#{} {} ({})", pr.number, pr.title, pr.state)
}

/// List the pull requests of `project`, one line each.
pub async fn list_pulls<C: Console>(
    api: &dyn GithubApiPort,
    console: &mut C,
    project: &str,
) -> Result<(), CliError> {
    console.progress(&format!("Fetching pull requests for {project}"))?;
    let prs = api.get_pull_requests(project).await?;

    if prs.is_empty() {
        console.info(&format!("No pull requests in {project}"))?;
        return Ok(());
    }

    for pr in &prs {
        console.info(&headline(pr))?;
        let author = pr.user.as_ref().map_or("unknown", |u| u.login.as_str());
        console.verbose(&format!(
            "{} -> {} at {} by {author}",
            pr.head.reference, pr.base.reference, pr.head.sha
        ))?;
    }
    console.info(&format!("{} pull request(s)", prs.len()))?;
    Ok(())
}

/// Show one pull request followed by its labels.
pub async fn show_pull<C: Console>(
    api: &dyn GithubApiPort,
    console: &mut C,
    project: &str,
    number: u64,
) -> Result<(), CliError> {
    console.progress(&format!("Fetching pull request {number} of {project}"))?;
    let pr = api.get_pull_request(project, number).await?;

    console.info(&headline(&pr))?;
    if let Some(user) = &pr.user {
        console.info(&format!("Author: {}", user.login))?;
    }
    console.info(&format!("Head: {} at {}", pr.head.reference, pr.head.sha))?;
    console.info(&format!("Base: {} at {}", pr.base.reference, pr.base.sha))?;
    if let Some(body) = pr.body.as_deref().filter(|b| !b.trim().is_empty()) {
        console.verbose(body)?;
    }

    show_labels(api, console, project, number).await
}

/// Show the labels of an issue. Pull requests share issue numbers.
pub async fn show_labels<C: Console>(
    api: &dyn GithubApiPort,
    console: &mut C,
    project: &str,
    number: u64,
) -> Result<(), CliError> {
    console.progress(&format!("Fetching labels of {number}"))?;
    let issue = api.get_issue(project, number).await?;
    report_labels(console, &issue)
}

fn report_labels<C: Console>(console: &mut C, issue: &Issue) -> Result<(), CliError> {
    if issue.labels.is_empty() {
        console.info(&format!("No labels on {}", issue.number))?;
    } else {
        console.info(&format!("Labels: {}", issue.label_names().join(", ")))?;
    }
    Ok(())
}
