//! Configuration types for the hnscout HTTP adapters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Hacker News API root.
pub const DEFAULT_HACKER_NEWS_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Default Firecrawl scrape endpoint.
pub const DEFAULT_FIRECRAWL_ENDPOINT: &str = "https://api.firecrawl.dev/v1/scrape";

/// Configuration for the Hacker News client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackerNewsConfig {
    /// API root; endpoints such as `item/1.json` are resolved against it.
    #[serde(default = "default_hacker_news_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_hacker_news_timeout")]
    pub timeout_secs: u64,

    /// How many top story ids to keep from `topstories.json`.
    #[serde(default = "default_top_stories_limit")]
    pub top_stories_limit: usize,

    /// How many item fetches the top-discussions listing keeps in flight.
    /// Output stays in rank order regardless.
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
}

fn default_hacker_news_url() -> String {
    DEFAULT_HACKER_NEWS_URL.to_string()
}

fn default_hacker_news_timeout() -> u64 {
    10
}

fn default_top_stories_limit() -> usize {
    30
}

fn default_fetch_concurrency() -> usize {
    1
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_hacker_news_url(),
            timeout_secs: default_hacker_news_timeout(),
            top_stories_limit: default_top_stories_limit(),
            fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

impl HackerNewsConfig {
    /// Create a configuration pointing at the given API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration for the Firecrawl client.
///
/// The API key is never read from or written to a config file; it is
/// supplied at runtime with [`FirecrawlConfig::with_api_key`].
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct FirecrawlConfig {
    /// Scrape endpoint URL.
    #[serde(default = "default_firecrawl_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_firecrawl_timeout")]
    pub timeout_secs: u64,

    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_firecrawl_endpoint() -> String {
    DEFAULT_FIRECRAWL_ENDPOINT.to_string()
}

fn default_firecrawl_timeout() -> u64 {
    60
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_firecrawl_endpoint(),
            timeout_secs: default_firecrawl_timeout(),
            api_key: None,
        }
    }
}

impl FirecrawlConfig {
    /// Create a configuration pointing at the given scrape endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the API key. Blank keys count as missing.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for FirecrawlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirecrawlConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hacker_news_defaults() {
        let config = HackerNewsConfig::default();

        assert_eq!(config.base_url, "https://hacker-news.firebaseio.com/v0");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.top_stories_limit, 30);
        assert_eq!(config.fetch_concurrency, 1);
    }

    #[test]
    fn test_firecrawl_defaults() {
        let config = FirecrawlConfig::default();

        assert_eq!(config.endpoint, "https://api.firecrawl.dev/v1/scrape");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = FirecrawlConfig::default().with_api_key(Some("   ".to_string()));
        assert!(config.api_key.is_none());

        let config = FirecrawlConfig::default().with_api_key(Some("fc-123".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("fc-123"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = FirecrawlConfig::default().with_api_key(Some("fc-secret".to_string()));
        let debug = format!("{:?}", config);

        assert!(!debug.contains("fc-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: HackerNewsConfig =
            serde_json::from_value(serde_json::json!({"fetch_concurrency": 8})).unwrap();

        assert_eq!(config.fetch_concurrency, 8);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.base_url, DEFAULT_HACKER_NEWS_URL);
    }
}
