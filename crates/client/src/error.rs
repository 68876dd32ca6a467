//! Error types for the hnscout HTTP adapters.

use reqwest::StatusCode;

/// Result type for client construction.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while building a client. Request-time failures are not
/// reported through this type: the Hacker News client collapses them to
/// `None` and the Firecrawl client reports them as [`ScrapeError`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Reasons a scrape produced no markdown.
///
/// The messages are shown to the caller verbatim, so each one names the
/// failed operation and, where known, the cause.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// No API key was configured.
    #[error("Error: Firecrawl API key not found in environment variables")]
    MissingApiKey,

    /// The service answered, but without `success: true` and a markdown body.
    #[error("Error scraping {url}: No markdown content returned. Response: {response}")]
    NoMarkdown { url: String, response: String },

    /// The service returned a non-success status.
    #[error("HTTP error while scraping {url}: {status}")]
    Status { url: String, status: StatusCode },

    /// The request could not be sent or timed out.
    #[error("Request error while scraping {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not JSON.
    #[error("Unexpected error while scraping {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ScrapeError {
    /// Check if the failure came from configuration rather than the network.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}
