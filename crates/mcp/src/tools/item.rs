// Hacker News item lookup

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{current_timestamp, json_schema_integer, json_schema_object, Tool};
use anyhow::{Context, Result};
use hnscout_client::NewsSource;
use hnscout_core::{render, ItemId};
use serde::Deserialize;
use std::sync::Arc;

/// Tool to fetch and render a single item
pub struct HnItemTool {
    news: Arc<dyn NewsSource>,
    now: fn() -> i64,
}

impl HnItemTool {
    pub fn new(news: Arc<dyn NewsSource>) -> Self {
        Self {
            news,
            now: current_timestamp,
        }
    }

    /// Replace the clock used for relative times.
    pub fn with_clock(mut self, now: fn() -> i64) -> Self {
        self.now = now;
        self
    }
}

#[derive(Debug, Deserialize)]
struct HnItemArgs {
    item_id: u64,
}

#[async_trait::async_trait]
impl Tool for HnItemTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_hnews_item".to_string(),
            description: "Retrieve detailed information about a specific Hacker News item \
                          (story, comment, job or poll) by its numeric ID, including \
                          metadata, content and relevant URLs."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "item_id": json_schema_integer(
                        "The numeric identifier of the Hacker News item (e.g., 34159862)"
                    )
                }),
                vec!["item_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: HnItemArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for get_hnews_item")?;
        let id = ItemId(args.item_id);

        let text = match self.news.get_item(id).await {
            Some(item) => render::item_detail(&item, (self.now)()),
            None => {
                tracing::info!(item_id = %id, "Item not found");
                render::item_not_found(id)
            }
        };

        Ok(CallToolResult::text(text))
    }
}
