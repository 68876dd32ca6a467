//! # hnscout client
//!
//! HTTP adapters for the two services hnscout reads from:
//!
//! - [`HackerNewsClient`] for the Hacker News Firebase API. Failures
//!   collapse to `None`.
//! - [`FirecrawlClient`] for the Firecrawl scrape API. Failures are returned
//!   as a [`ScrapeError`].
//!
//! Tool handlers depend on the [`NewsSource`] and [`PageScraper`] traits
//! rather than on the concrete clients.
//!
//! ```rust,no_run
//! use hnscout_client::{HackerNewsClient, HackerNewsConfig, ItemId};
//!
//! # async fn example() -> hnscout_client::ClientResult<()> {
//! let client = HackerNewsClient::new(&HackerNewsConfig::default())?;
//! if let Some(item) = client.get_item(ItemId(8863)).await {
//!     println!("{:?}", item.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod firecrawl;
pub mod hacker_news;

pub use config::{FirecrawlConfig, HackerNewsConfig};
pub use error::{ClientError, ClientResult, ScrapeError};
pub use firecrawl::FirecrawlClient;
pub use hacker_news::HackerNewsClient;

pub use hnscout_core::{ItemId, NewsItem};

/// User-Agent sent with every outbound request.
pub(crate) const USER_AGENT: &str = concat!("hnscout/", env!("CARGO_PKG_VERSION"));

/// Read access to Hacker News items.
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch an item, or `None` if it does not exist or could not be fetched.
    async fn get_item(&self, id: ItemId) -> Option<NewsItem>;

    /// Ranked ids of the current top stories.
    async fn top_story_ids(&self) -> Vec<ItemId>;
}

/// Renders web pages to markdown.
#[async_trait::async_trait]
pub trait PageScraper: Send + Sync {
    async fn scrape_markdown(&self, url: &str) -> Result<String, ScrapeError>;
}
