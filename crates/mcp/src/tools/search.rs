// Hacker News search via a site-scoped web search scraped through Firecrawl

use crate::config::SearchConfig;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use hnscout_client::PageScraper;
use hnscout_core::{render, ResultExtractor, SearchResult};
use serde::Deserialize;
use std::sync::Arc;

/// Tool to search Hacker News discussions
pub struct HnSearchTool {
    scraper: Arc<dyn PageScraper>,
    extractor: ResultExtractor,
    engine_url: String,
    max_results: usize,
}

impl HnSearchTool {
    pub fn new(scraper: Arc<dyn PageScraper>, config: &SearchConfig) -> Self {
        Self {
            scraper,
            extractor: ResultExtractor::new(config.domain.clone()),
            engine_url: config.engine_url.clone(),
            max_results: config.max_results,
        }
    }

    /// `{engine}?q=site:{domain}+{query}` with spaces turned into `+`.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q=site:{}+{}",
            self.engine_url,
            self.extractor.domain(),
            query.replace(' ', "+")
        )
    }

    async fn search(&self, query: &str) -> Vec<SearchResult> {
        let search_url = self.search_url(query);

        match self.scraper.scrape_markdown(&search_url).await {
            Ok(markdown) => self.extractor.extract(&markdown),
            Err(e) => {
                tracing::warn!(
                    query,
                    configuration = e.is_configuration(),
                    error = %e,
                    "Search scrape failed"
                );
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
}

#[async_trait::async_trait]
impl Tool for HnSearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_hnews".to_string(),
            description: "Search for Hacker News discussions matching specific keywords. \
                          Returns matching discussions with titles, URLs and brief descriptions."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string(
                        "The search terms to find in Hacker News discussions (e.g., \"Python web frameworks\")"
                    )
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_hnews")?;

        if args.query.trim().is_empty() {
            return Ok(CallToolResult::text(render::EMPTY_QUERY));
        }

        let mut results = self.search(&args.query).await;
        results.truncate(self.max_results);

        Ok(CallToolResult::text(render::search_results(&args.query, &results)))
    }
}
