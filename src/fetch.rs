//! Background fetching.
//!
//! Each call to [`spawn`] runs a single fetch as a tokio task and sends the
//! outcome to the UI thread over an unbounded [`mpsc`] channel.  The UI owns
//! the post list and applies messages in arrival order, so the fetch that
//! finishes last wins.  Concurrent fetches are not coordinated.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::source::{FetchError, Post, PostSource};

/// Messages sent from a fetch task to the UI thread.
#[derive(Debug)]
pub enum FetchMsg {
    /// A fetch succeeded.  `posts` replaces whatever the UI was showing.
    Loaded {
        posts: Vec<Post>,
        fetched_at: DateTime<Utc>,
    },
    /// A fetch failed.  The current post list should be left alone.
    Failed(FetchError),
}

/// Spawn one fetch on `runtime`.
///
/// Exactly one [`FetchMsg`] is sent per call.  If the receiver has been
/// dropped the UI has exited and the result is discarded.
pub fn spawn<S>(runtime: &Handle, source: Arc<S>, tx: mpsc::UnboundedSender<FetchMsg>) -> JoinHandle<()>
where
    S: PostSource + 'static,
{
    runtime.spawn(async move {
        info!(source = source.name(), "fetch started");

        let msg = match source.fetch().await {
            Ok(results) => {
                let posts = results.into_posts();
                info!(source = source.name(), count = posts.len(), "fetch succeeded");
                FetchMsg::Loaded {
                    posts,
                    fetched_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "fetch failed");
                FetchMsg::Failed(e)
            }
        };

        let _ = tx.send(msg);
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
