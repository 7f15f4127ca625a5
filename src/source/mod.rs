//! Where posts come from.
//!
//! This module defines the [`PostSource`] trait, the [`Post`] record and the
//! [`FetchError`] taxonomy.  The only real implementation is [`HnSource`],
//! which talks to the Algolia Hacker News search API.
//!
//! ## For contributors
//!
//! The UI never sees a source directly: [`crate::fetch::spawn`] runs one
//! [`fetch()`](PostSource::fetch) on the tokio runtime and sends the outcome
//! back over a channel.  Tests plug in their own source the same way.

mod hn;
mod post;

pub use hn::{HnSource, DEFAULT_ENDPOINT};
pub use post::{DecodeError, Post, Results};

use std::future::Future;

use reqwest::StatusCode;

/// Everything that can go wrong during one fetch.  None of it is retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connect failure, timeout, or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Trait that every post source implements.
///
/// Fetches run on a tokio worker, so both the source and the returned
/// future must be [`Send`].
pub trait PostSource: Send + Sync {
    /// Human-readable label, used in logs.
    fn name(&self) -> &str;

    /// Issue exactly one request and decode the full response.
    fn fetch(&self) -> impl Future<Output = Result<Results, FetchError>> + Send;
}
