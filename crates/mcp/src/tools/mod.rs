pub mod discussions;
pub mod item;
pub mod scrape;
pub mod search;
mod registry;

pub use discussions::HnPopularTool;
pub use item::HnItemTool;
pub use scrape::FirecrawlScrapeTool;
pub use search::HnSearchTool;
pub use registry::{
    json_schema_integer, json_schema_object, json_schema_string, Tool, ToolRegistry,
};

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use hnscout_client::{FirecrawlClient, HackerNewsClient, NewsSource, PageScraper};
use std::sync::Arc;

/// Current unix time in seconds.
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Build the registry with all four tools wired to live HTTP clients.
pub fn build_registry(config: &ServerConfig) -> Result<ToolRegistry> {
    let news: Arc<dyn NewsSource> = Arc::new(
        HackerNewsClient::new(&config.hacker_news)
            .context("Failed to create Hacker News client")?,
    );
    let firecrawl =
        FirecrawlClient::new(&config.firecrawl).context("Failed to create Firecrawl client")?;
    if !firecrawl.has_api_key() {
        tracing::warn!("FIRECRAWL_API_KEY not set, scraping and search will report errors");
    }
    let scraper: Arc<dyn PageScraper> = Arc::new(firecrawl);

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(HnItemTool::new(news.clone())));
    registry.register(Arc::new(
        HnPopularTool::new(news).with_concurrency(config.hacker_news.fetch_concurrency),
    ));
    registry.register(Arc::new(FirecrawlScrapeTool::new(scraper.clone())));
    registry.register(Arc::new(HnSearchTool::new(scraper, &config.search)));

    Ok(registry)
}


#[cfg(test)]
mod tests {
    use super::*;
    use hnscout_client::HackerNewsConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_build_registry_has_all_tools() {
        let registry = build_registry(&ServerConfig::default()).unwrap();

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "firecrawl_scrape_url",
                "get_hnews_item",
                "get_hnews_popular_discussions",
                "search_hnews",
            ]
        );
    }

    #[tokio::test]
    async fn test_registry_against_live_clients() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0/item/121003.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 121003,
                "by": "tel",
                "title": "Ask HN: The Arc Effect",
                "type": "story",
                "time": 1203647620
            })))
            .mount(&server)
            .await;

        let config = ServerConfig {
            hacker_news: HackerNewsConfig::new(format!("{}/v0", server.uri())),
            ..Default::default()
        };
        let registry = build_registry(&config).unwrap();

        let found = registry
            .get("get_hnews_item")
            .unwrap()
            .execute(serde_json::json!({"item_id": 121003}))
            .await
            .unwrap();
        assert!(found
            .text_content()
            .starts_with("# Ask HN: The Arc Effect\n\n**Type:** story\n**Author:** tel\n"));

        let missing = registry
            .get("get_hnews_item")
            .unwrap()
            .execute(serde_json::json!({"item_id": 1}))
            .await
            .unwrap();
        assert_eq!(
            missing.text_content(),
            "Could not find Hacker News item with ID 1"
        );

        // No API key configured: scraping degrades to a message.
        let scraped = registry
            .get("firecrawl_scrape_url")
            .unwrap()
            .execute(serde_json::json!({"url": "https://example.com"}))
            .await
            .unwrap();
        assert!(scraped
            .text_content()
            .starts_with("Failed to scrape https://example.com: Error: Firecrawl API key"));
    }
}
