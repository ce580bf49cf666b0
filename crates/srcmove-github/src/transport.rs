//! HTTP transport abstraction for the GitHub API.
//!
//! The client only needs one operation: GET a path relative to the API root
//! and decode the JSON body into the expected shape. The production
//! implementation uses reqwest; tests swap in a fake with canned responses.

use crate::config::GithubClientConfig;
use crate::error::{GithubError, GithubResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// Transport Trait
// ============================================================================

/// Trait for transports that can fetch JSON from API paths.
///
/// This is an implementation detail - external code should use the
/// `GithubApiPort` trait.
#[async_trait]
pub trait GithubTransport: Send + Sync {
    /// GET `path` (relative to the API root) and deserialize the body.
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> GithubResult<T>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// Production transport using reqwest.
///
/// No authentication, retries, or pagination: a single GET per call.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Create a transport from the public configuration.
    pub fn new(config: &GithubClientConfig) -> GithubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Parse the API root, making sure relative paths resolve beneath it.
fn parse_base_url(raw: &str) -> GithubResult<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl GithubTransport for ReqwestTransport {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> GithubResult<T> {
        let url = self.base_url.join(path)?;
        debug!(%url, "GET");

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Transport for Testing
// ============================================================================
