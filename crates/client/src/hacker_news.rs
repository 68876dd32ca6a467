//! Hacker News API client.
//!
//! Every request failure (transport, non-2xx status, undecodable body,
//! unexpected JSON shape) collapses to `None` or an empty list and is logged.
//! Nothing is raised to the caller.

use crate::config::HackerNewsConfig;
use crate::error::{ClientError, ClientResult};
use crate::USER_AGENT;
use hnscout_core::{ItemId, NewsItem};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Client for the Hacker News Firebase API.
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    client: Client,
    base_url: Url,
    top_stories_limit: usize,
}

impl HackerNewsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &HackerNewsConfig) -> ClientResult<Self> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Hacker News base URL cannot be a base: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            top_stories_limit: config.top_stories_limit,
        })
    }

    /// Resolve an endpoint such as `item/1.json` against the API root.
    fn build_url(&self, endpoint: &str) -> Option<Url> {
        match self.base_url.join(endpoint.trim_start_matches('/')) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(endpoint, error = %e, "Invalid Hacker News endpoint");
                None
            }
        }
    }

    /// GET an endpoint and decode its JSON body.
    pub async fn fetch_json(&self, endpoint: &str) -> Option<Value> {
        let url = self.build_url(endpoint)?;
        debug!(url = %url, "GET request");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, timeout = e.is_timeout(), error = %e, "Hacker News request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Hacker News returned an error status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(url = %url, error = %e, "Hacker News returned an undecodable body");
                None
            }
        }
    }

    /// Fetch an item. Anything other than a non-empty JSON object, including
    /// the `null` the API returns for unknown ids, yields `None`.
    pub async fn get_item(&self, id: ItemId) -> Option<NewsItem> {
        let body = self.fetch_json(&format!("item/{}.json", id)).await?;
        if !body.as_object().is_some_and(|fields| !fields.is_empty()) {
            debug!(item_id = %id, "No item data");
            return None;
        }

        match serde_json::from_value(body) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(item_id = %id, error = %e, "Item has an unexpected shape");
                None
            }
        }
    }

    /// Fetch the ranked top story ids, keeping the first `top_stories_limit`.
    pub async fn top_story_ids(&self) -> Vec<ItemId> {
        match self.fetch_json("topstories.json").await {
            Some(Value::Array(ids)) => ids
                .iter()
                .filter_map(Value::as_u64)
                .take(self.top_stories_limit)
                .map(ItemId)
                .collect(),
            Some(_) => {
                warn!("topstories.json was not a list");
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl crate::NewsSource for HackerNewsClient {
    async fn get_item(&self, id: ItemId) -> Option<NewsItem> {
        HackerNewsClient::get_item(self, id).await
    }

    async fn top_story_ids(&self) -> Vec<ItemId> {
        HackerNewsClient::top_story_ids(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_client(base_url: &str) -> HackerNewsClient {
        HackerNewsClient::new(&HackerNewsConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_get_item() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/8863.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 8863,
                "by": "dhouston",
                "title": "My YC app: Dropbox - Throw away your USB drive",
                "type": "story",
                "kids": [8952, 9224],
                "descendants": 71
            })))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        let item = client.get_item(ItemId(8863)).await.unwrap();

        assert_eq!(item.id, Some(ItemId(8863)));
        assert_eq!(item.by.as_deref(), Some("dhouston"));
        assert_eq!(item.descendants, Some(71));
    }

    #[tokio::test]
    async fn test_get_item_null_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        assert!(client.get_item(ItemId(1)).await.is_none());
    }

    #[tokio::test]
    async fn test_get_item_empty_object_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/3.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        assert!(client.get_item(ItemId(3)).await.is_none());
    }

    #[tokio::test]
    async fn test_get_item_list_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/2.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        assert!(client.get_item(ItemId(2)).await.is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/3.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        assert!(client.get_item(ItemId(3)).await.is_none());
        assert!(client.fetch_json("item/3.json").await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/topstories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        assert!(client.fetch_json("topstories.json").await.is_none());
        assert!(client.top_story_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/4.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 4}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = HackerNewsConfig {
            timeout_secs: 1,
            ..HackerNewsConfig::new(server.uri())
        };
        let client = HackerNewsClient::new(&config).unwrap();
        assert!(client.get_item(ItemId(4)).await.is_none());
    }

    #[tokio::test]
    async fn test_top_story_ids_are_limited() {
        let server = MockServer::start().await;
        let ids: Vec<u64> = (1..=500).collect();

        Mock::given(method("GET"))
            .and(path("/topstories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ids))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        let top = client.top_story_ids().await;

        assert_eq!(top.len(), 30);
        assert_eq!(top.first(), Some(&ItemId(1)));
        assert_eq!(top.last(), Some(&ItemId(30)));
    }

    #[tokio::test]
    async fn test_top_story_ids_not_a_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/topstories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ids": [1]})))
            .mount(&server)
            .await;

        let client = create_client(&server.uri());
        assert!(client.top_story_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_base_url_with_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0/item/5.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 5})))
            .mount(&server)
            .await;

        let client = create_client(&format!("{}/v0", server.uri()));
        assert_eq!(client.get_item(ItemId(5)).await.unwrap().id, Some(ItemId(5)));
    }

    #[tokio::test]
    async fn test_build_url() {
        let client = create_client("https://hacker-news.firebaseio.com/v0");

        let url = client.build_url("item/42.json").unwrap();
        assert_eq!(url.as_str(), "https://hacker-news.firebaseio.com/v0/item/42.json");

        let url = client.build_url("/topstories.json").unwrap();
        assert_eq!(url.as_str(), "https://hacker-news.firebaseio.com/v0/topstories.json");
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let result = HackerNewsClient::new(&HackerNewsConfig::new("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
