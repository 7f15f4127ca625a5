//! Hacker News front page over the Algolia search API.

use std::time::Duration;

use tracing::debug;
use url::Url;

use super::{FetchError, PostSource, Results};

/// The front page, as served by the search API.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?tags=front_page";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches and decodes the post list from a fixed endpoint.
#[derive(Debug)]
pub struct HnSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HnSource {
    /// Build a source for `endpoint`.  `timeout` bounds the whole request,
    /// body included.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PostSource for HnSource {
    fn name(&self) -> &str {
        "hacker-news"
    }

    async fn fetch(&self) -> Result<Results, FetchError> {
        let resp = self.client.get(self.endpoint.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.bytes().await?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "received response body");

        Ok(Results::decode(&body)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
