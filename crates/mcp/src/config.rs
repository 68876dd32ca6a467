use anyhow::{Context, Result};
use hnscout_client::{FirecrawlConfig, HackerNewsConfig};
use hnscout_core::extract::DEFAULT_DOMAIN;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub hacker_news: HackerNewsConfig,

    #[serde(default)]
    pub firecrawl: FirecrawlConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search engine results page, queried as `{engine_url}?q=site:{domain}+...`
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_engine_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_max_results() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: default_engine_url(),
            domain: default_domain(),
            max_results: default_max_results(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")
        } else {
            tracing::info!(
                path = %config_path.display(),
                "Configuration file not found, using defaults"
            );
            Ok(Self::default())
        }
    }

    /// Attach the Firecrawl credential. It only ever comes from the
    /// environment or the command line.
    pub fn with_firecrawl_api_key(mut self, api_key: Option<String>) -> Self {
        self.firecrawl = self.firecrawl.with_api_key(api_key);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ServerConfig::load(&temp_dir.path().join("hnscout.toml")).unwrap();

        assert_eq!(config.hacker_news, HackerNewsConfig::default());
        assert_eq!(config.search, SearchConfig::default());
        assert!(config.firecrawl.api_key.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hnscout.toml");
        std::fs::write(
            &path,
            r#"
[hacker_news]
fetch_concurrency = 8

[firecrawl]
timeout_secs = 90

[search]
max_results = 5
"#,
        )
        .unwrap();

        let config = ServerConfig::load(&path).unwrap();

        assert_eq!(config.hacker_news.fetch_concurrency, 8);
        assert_eq!(config.hacker_news.timeout_secs, 10);
        assert_eq!(config.firecrawl.timeout_secs, 90);
        assert_eq!(config.firecrawl.endpoint, "https://api.firecrawl.dev/v1/scrape");
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.domain, "news.ycombinator.com");
    }

    #[test]
    fn test_api_key_not_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hnscout.toml");
        std::fs::write(&path, "[firecrawl]\napi_key = \"fc-from-file\"\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert!(config.firecrawl.api_key.is_none());

        let config = config.with_firecrawl_api_key(Some("fc-from-env".to_string()));
        assert_eq!(config.firecrawl.api_key.as_deref(), Some("fc-from-env"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hnscout.toml");
        std::fs::write(&path, "[hacker_news\n").unwrap();

        assert!(ServerConfig::load(&path).is_err());
    }
}
