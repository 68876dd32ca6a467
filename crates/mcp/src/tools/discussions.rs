// Top stories listing

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{current_timestamp, json_schema_object, Tool};
use anyhow::Result;
use futures::stream::{self, StreamExt};
use hnscout_client::NewsSource;
use hnscout_core::{render, NewsItem};
use std::sync::Arc;

/// Tool to list the current top stories with their metadata
pub struct HnPopularTool {
    news: Arc<dyn NewsSource>,
    concurrency: usize,
    now: fn() -> i64,
}

impl HnPopularTool {
    pub fn new(news: Arc<dyn NewsSource>) -> Self {
        Self {
            news,
            concurrency: 1,
            now: current_timestamp,
        }
    }

    /// Number of item fetches kept in flight. Results are gathered by rank,
    /// not by completion.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Replace the clock used for relative times.
    pub fn with_clock(mut self, now: fn() -> i64) -> Self {
        self.now = now;
        self
    }
}

#[async_trait::async_trait]
impl Tool for HnPopularTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_hnews_popular_discussions".to_string(),
            description: "Retrieve today's top discussions on Hacker News. Returns the current \
                          top 30 stories with title, author, score, comment count, post time \
                          and relevant URLs."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let mut ids = self.news.top_story_ids().await;
        ids.truncate(render::TOP_DISCUSSIONS_LIMIT);
        if ids.is_empty() {
            return Ok(CallToolResult::text(render::TOP_DISCUSSIONS_UNAVAILABLE));
        }

        let items: Vec<Option<NewsItem>> = stream::iter(ids.iter().copied())
            .map(|id| self.news.get_item(id))
            .buffered(self.concurrency)
            .collect()
            .await;

        let now = (self.now)();
        let entries: Vec<String> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                item.as_ref()
                    .map(|item| render::discussion_entry(i + 1, item, now))
            })
            .collect();

        tracing::info!(
            requested = ids.len(),
            rendered = entries.len(),
            "Rendered top discussions"
        );

        Ok(CallToolResult::text(render::discussion_list(&entries)))
    }
}
