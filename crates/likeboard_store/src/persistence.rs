//! Durable snapshots behind an in-memory store.

use async_trait::async_trait;
use likeboard_core::Post;
use likeboard_error::LikeboardResult;

/// Writes the whole post collection somewhere durable.
///
/// The store calls [`save`](Self::save) with the collection as it will look
/// after a mutation, before publishing that mutation. A failed save aborts
/// the mutation.
#[async_trait]
pub trait SnapshotPersistence: Send + Sync + std::fmt::Debug {
    /// Persist the full collection.
    async fn save(&self, posts: &[Post]) -> LikeboardResult<()>;

    /// Load the last persisted collection, empty if none exists yet.
    async fn load(&self) -> LikeboardResult<Vec<Post>>;
}
