//! The story record and the response envelope it arrives in.
//!
//! A search response looks like:
//!
//! ```text
//! {"hits": [{"objectID": "1", "points": 42, "title": "Test", "url": "https://a.com"}, ...]}
//! ```
//!
//! [`Results::decode`] turns that body into typed [`Post`]s.  Decoding is
//! all-or-nothing: one bad hit fails the whole response, so a partial list is
//! never handed to the UI.

use std::collections::HashSet;

use serde::Deserialize;
use url::Url;

/// A single story from the front page.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Post {
    /// Unique identifier within one response; used as the list key.
    #[serde(rename = "objectID")]
    pub id: String,

    /// Upvote count.  Display only.
    #[serde(rename = "points")]
    pub score: i64,

    /// Headline.
    pub title: String,

    /// Where the story points.  Text posts (Ask HN etc.) have none.
    #[serde(default)]
    pub url: Option<String>,
}

impl Post {
    /// Host part of [`url`](Self::url), e.g. `a.com`.
    pub fn host(&self) -> Option<String> {
        let url = Url::parse(self.url.as_deref()?).ok()?;
        url.host_str().map(|h| h.trim_start_matches("www.").to_string())
    }
}

/// The decoded response: posts in wire order, untouched.
#[derive(Debug, Eq, PartialEq, Deserialize)]
pub struct Results {
    pub hits: Vec<Post>,
}

/// Why a response body could not be turned into [`Results`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Malformed JSON, wrong shape, or a hit missing a required field.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hit #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("duplicate objectID {0:?}")]
    DuplicateId(String),
}

impl Results {
    /// Decode and validate a full response body.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let mut results: Results = serde_json::from_slice(body)?;

        let mut seen = HashSet::with_capacity(results.hits.len());
        for (index, post) in results.hits.iter_mut().enumerate() {
            if post.id.trim().is_empty() {
                return Err(DecodeError::EmptyField { index, field: "objectID" });
            }
            if post.title.trim().is_empty() {
                return Err(DecodeError::EmptyField { index, field: "title" });
            }
            if !seen.insert(post.id.clone()) {
                return Err(DecodeError::DuplicateId(post.id.clone()));
            }
            // An empty string is as good as no link.
            if post.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
                post.url = None;
            }
        }

        Ok(results)
    }

    pub fn into_posts(self) -> Vec<Post> {
        self.hits
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
