//! Firecrawl scrape client.
//!
//! Converts a target URL into the rendered page's markdown. Failures are
//! returned as [`ScrapeError`] values, never panics.

use crate::config::FirecrawlConfig;
use crate::error::{ClientResult, ScrapeError};
use crate::USER_AGENT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'static str; 1],
}

/// `{"success": true, "data": {"markdown": "..."}}`
#[derive(Debug, Deserialize)]
struct ScrapeEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ScrapeData>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    #[serde(default)]
    markdown: Option<String>,
}

fn markdown_from(body: &Value) -> Option<String> {
    let envelope = ScrapeEnvelope::deserialize(body).ok()?;
    if !envelope.success {
        return None;
    }
    envelope.data?.markdown
}

/// Client for the Firecrawl `/scrape` endpoint.
#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl FirecrawlClient {
    /// Create a new client with the given configuration. A missing API key
    /// is not an error here; scrapes report it instead.
    pub fn new(config: &FirecrawlConfig) -> ClientResult<Self> {
        let endpoint = Url::parse(config.endpoint.trim())?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Scrape `url` and return its markdown.
    pub async fn scrape_markdown(&self, url: &str) -> Result<String, ScrapeError> {
        let api_key = self.api_key.as_deref().ok_or(ScrapeError::MissingApiKey)?;

        debug!(endpoint = %self.endpoint, page = url, "Scrape request");

        let request = ScrapeRequest {
            url,
            formats: ["markdown"],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(page = url, status = status.as_u16(), body = %body, "Scrape failed");
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await.map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })?;
        let body: Value = serde_json::from_str(&text).map_err(|source| ScrapeError::Decode {
            url: url.to_string(),
            source,
        })?;

        match markdown_from(&body) {
            Some(markdown) => {
                debug!(page = url, chars = markdown.chars().count(), "Scrape succeeded");
                Ok(markdown)
            }
            None => Err(ScrapeError::NoMarkdown {
                url: url.to_string(),
                response: body.to_string(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl crate::PageScraper for FirecrawlClient {
    async fn scrape_markdown(&self, url: &str) -> Result<String, ScrapeError> {
        FirecrawlClient::scrape_markdown(self, url).await
    }
}
