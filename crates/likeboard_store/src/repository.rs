//! The persistence collaborator trait.

use crate::PostSubscription;
use async_trait::async_trait;
use likeboard_core::{NewPost, Platform, Post, PostId};
use likeboard_error::LikeboardResult;

/// Storage backend for posts.
///
/// Every write replaces whole records. There is no partial-field patch and
/// no concurrency token: the last write for an id wins.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post with zeroed counters and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty description, or a store
    /// error if the write fails.
    async fn create(&self, new_post: NewPost) -> LikeboardResult<PostId>;

    /// Store a complete record as-is, counters included.
    async fn insert(&self, post: Post) -> LikeboardResult<()>;

    /// Follow the post set of one platform.
    ///
    /// Dropping the subscription stops delivery.
    async fn subscribe(&self, platform: Platform) -> LikeboardResult<PostSubscription>;

    /// Replace the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found store error for an unknown id, and a validation
    /// error if the record changes `id` or `platform`.
    async fn update(&self, id: &PostId, post: Post) -> LikeboardResult<()>;

    /// Remove a post.
    ///
    /// # Errors
    ///
    /// Returns a not-found store error for an unknown id.
    async fn delete(&self, id: &PostId) -> LikeboardResult<()>;

    /// Look up a post by id on any platform.
    async fn get(&self, id: &PostId) -> LikeboardResult<Option<Post>>;

    /// Current posts of one platform, newest first.
    async fn list(&self, platform: Platform) -> LikeboardResult<Vec<Post>>;
}
