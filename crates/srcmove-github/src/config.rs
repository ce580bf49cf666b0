//! Public configuration for the GitHub client.

use std::time::Duration;

/// Configuration for the GitHub client.
///
/// # Example
///
/// ```
/// use srcmove_github::GithubClientConfig;
/// use std::time::Duration;
///
/// let config = GithubClientConfig::new()
///     .with_base_url("https://github.example.com/api/v3/")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Root of the REST API; request paths are resolved against it
    pub(crate) base_url: String,
    /// User agent string (GitHub rejects requests without one)
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com/".to_string(),
            user_agent: concat!("srcmove-github/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GithubClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root, e.g. for GitHub Enterprise.
    ///
    /// Defaults to `https://api.github.com/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GithubClientConfig::new();
        assert_eq!(config.base_url, "https://api.github.com/");
        assert!(config.user_agent.starts_with("srcmove-github/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GithubClientConfig::new()
            .with_base_url("http://127.0.0.1:8080")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
