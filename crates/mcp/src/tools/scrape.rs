// Web page scraping through Firecrawl

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use hnscout_client::PageScraper;
use hnscout_core::render;
use serde::Deserialize;
use std::sync::Arc;

/// Tool to fetch a page as readable markdown
pub struct FirecrawlScrapeTool {
    scraper: Arc<dyn PageScraper>,
}

impl FirecrawlScrapeTool {
    pub fn new(scraper: Arc<dyn PageScraper>) -> Self {
        Self { scraper }
    }
}

#[derive(Debug, Deserialize)]
struct ScrapeArgs {
    url: String,
}

#[async_trait::async_trait]
impl Tool for FirecrawlScrapeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "firecrawl_scrape_url".to_string(),
            description: "Extract clean, readable content from any web page. Returns the page \
                          as Markdown, including JavaScript-rendered sites."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "url": json_schema_string(
                        "The complete web address to scrape (e.g., \"https://example.com/page\")"
                    )
                }),
                vec!["url"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ScrapeArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for firecrawl_scrape_url")?;

        let text = match self.scraper.scrape_markdown(&args.url).await {
            Ok(markdown) => render::scraped_page(&args.url, &markdown),
            Err(e) => {
                tracing::warn!(
                    url = %args.url,
                    configuration = e.is_configuration(),
                    error = %e,
                    "Scrape failed"
                );
                render::scrape_failed(&args.url, &e.to_string())
            }
        };

        Ok(CallToolResult::text(text))
    }
}
