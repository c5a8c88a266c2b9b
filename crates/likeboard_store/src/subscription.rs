//! Push feed of a platform's post set.

use futures::Stream;
use likeboard_core::{Platform, Post};
use likeboard_error::{LikeboardResult, StoreError, StoreErrorKind};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Live view of one platform's posts.
///
/// Each change delivers the full ordered set, not a diff.
#[derive(Debug)]
pub struct PostSubscription {
    platform: Platform,
    receiver: watch::Receiver<Vec<Post>>,
}

impl PostSubscription {
    pub(crate) fn new(platform: Platform, receiver: watch::Receiver<Vec<Post>>) -> Self {
        Self { platform, receiver }
    }

    /// Platform this subscription follows.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Most recent snapshot without marking it seen.
    pub fn current(&self) -> Vec<Post> {
        self.receiver.borrow().clone()
    }

    /// Whether a snapshot arrived since the last [`latest`](Self::latest).
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Most recent snapshot, marking it seen.
    pub fn latest(&mut self) -> Vec<Post> {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns an unavailable store error once the store has shut down.
    pub async fn changed(&mut self) -> LikeboardResult<Vec<Post>> {
        self.receiver.changed().await.map_err(|_| {
            StoreError::new(StoreErrorKind::Unavailable(format!(
                "{} feed closed",
                self.platform
            )))
        })?;
        Ok(self.latest())
    }

    /// Convert into a stream that yields the current snapshot, then one per change.
    pub fn into_stream(self) -> impl Stream<Item = Vec<Post>> {
        WatchStream::new(self.receiver)
    }
}
