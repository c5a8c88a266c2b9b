//! Per-platform cached view used by presentation layers.

use crate::{Notice, PostRepository, PostSubscription};
use likeboard_core::{CounterAction, LikeStatus, NewPost, Platform, Post, PostEdit, PostId};
use likeboard_error::{LikeboardError, LikeboardResult, StoreError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Cached posts of the platform being viewed, plus the mutation entry points.
///
/// Counter changes are computed from the cached record, not the store's
/// current one, and sent back as a full replacement. When the store rejects
/// a write the cache is left as it was and a [`Notice`] is recorded.
pub struct PlatformBoard {
    repo: Arc<dyn PostRepository>,
    subscription: PostSubscription,
    posts: Vec<Post>,
    notices: Vec<Notice>,
}

impl std::fmt::Debug for PlatformBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformBoard")
            .field("platform", &self.subscription.platform())
            .field("posts", &self.posts.len())
            .field("notices", &self.notices.len())
            .finish()
    }
}

impl PlatformBoard {
    /// Subscribe to `platform` and load its current posts.
    #[instrument(skip(repo))]
    pub async fn open(repo: Arc<dyn PostRepository>, platform: Platform) -> LikeboardResult<Self> {
        let mut subscription = repo.subscribe(platform).await?;
        let posts = subscription.latest();
        debug!(count = posts.len(), "Board opened");
        Ok(Self {
            repo,
            subscription,
            posts,
            notices: Vec::new(),
        })
    }

    /// Platform being viewed.
    pub fn platform(&self) -> Platform {
        self.subscription.platform()
    }

    /// Cached posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Cached post by id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    /// Like status of a cached post.
    pub fn status(&self, id: &PostId) -> Option<LikeStatus> {
        self.post(id).map(Post::like_status)
    }

    /// Pull the newest snapshot if one arrived. Returns whether the cache changed.
    pub fn refresh(&mut self) -> bool {
        if self.subscription.has_changed() {
            self.posts = self.subscription.latest();
            true
        } else {
            false
        }
    }

    /// Wait until the store publishes a new snapshot for this platform.
    pub async fn changed(&mut self) -> LikeboardResult<()> {
        self.posts = self.subscription.changed().await?;
        Ok(())
    }

    /// View another platform. The previous subscription is dropped.
    #[instrument(skip(self), fields(from = %self.platform()))]
    pub async fn switch_platform(&mut self, platform: Platform) -> LikeboardResult<()> {
        if platform == self.platform() {
            return Ok(());
        }
        let mut subscription = self.repo.subscribe(platform).await?;
        self.posts = subscription.latest();
        self.subscription = subscription;
        info!(to = %platform, "Switched platform");
        Ok(())
    }

    /// Apply a counter action to a cached post and write it back.
    #[instrument(skip(self), fields(platform = %self.platform()))]
    pub async fn apply(&mut self, id: &PostId, action: CounterAction) -> LikeboardResult<Post> {
        let current = self.cached(id)?;
        let next = action.apply(&current);
        self.write(id, next, action.label()).await
    }

    /// Record one more comment.
    pub async fn increment_comments(&mut self, id: &PostId) -> LikeboardResult<Post> {
        self.apply(id, CounterAction::IncrementComments).await
    }

    /// Record one more moderator like.
    pub async fn increment_likes(&mut self, id: &PostId) -> LikeboardResult<Post> {
        self.apply(id, CounterAction::IncrementLikes).await
    }

    /// Remove one comment, stopping at zero.
    pub async fn decrement_comments(&mut self, id: &PostId) -> LikeboardResult<Post> {
        self.apply(id, CounterAction::DecrementComments).await
    }

    /// Remove one moderator like, stopping at zero.
    pub async fn decrement_likes(&mut self, id: &PostId) -> LikeboardResult<Post> {
        self.apply(id, CounterAction::DecrementLikes).await
    }

    /// Zero both counters in one write.
    pub async fn reset_counters(&mut self, id: &PostId) -> LikeboardResult<Post> {
        self.apply(id, CounterAction::Reset).await
    }

    /// Replace description, date, and image of a cached post.
    #[instrument(skip(self, edit), fields(platform = %self.platform()))]
    pub async fn edit_post(&mut self, id: &PostId, edit: PostEdit) -> LikeboardResult<Post> {
        edit.validate()?;
        let current = self.cached(id)?;
        let next = current.with_edit(edit);
        self.write(id, next, "edit the post").await
    }

    /// Create a post.
    #[instrument(skip(self, new_post), fields(platform = %new_post.platform()))]
    pub async fn create_post(&mut self, new_post: NewPost) -> LikeboardResult<PostId> {
        match self.repo.create(new_post).await {
            Ok(id) => {
                self.refresh();
                Ok(id)
            }
            Err(e) => Err(self.record_failure("create the post", e)),
        }
    }

    /// Delete a post. Callers are expected to confirm first.
    #[instrument(skip(self), fields(platform = %self.platform()))]
    pub async fn delete_post(&mut self, id: &PostId) -> LikeboardResult<()> {
        match self.repo.delete(id).await {
            Ok(()) => {
                self.posts.retain(|p| p.id() != id);
                self.refresh();
                Ok(())
            }
            Err(e) => Err(self.record_failure("delete the post", e)),
        }
    }

    /// Notices recorded since the last [`take_notices`](Self::take_notices).
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain recorded notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn cached(&self, id: &PostId) -> LikeboardResult<Post> {
        self.post(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id).into())
    }

    async fn write(&mut self, id: &PostId, next: Post, what: &str) -> LikeboardResult<Post> {
        match self.repo.update(id, next.clone()).await {
            Ok(()) => {
                if let Some(slot) = self.posts.iter_mut().find(|p| p.id() == id) {
                    *slot = next.clone();
                }
                self.refresh();
                Ok(next)
            }
            Err(e) => Err(self.record_failure(what, e)),
        }
    }

    fn record_failure(&mut self, what: &str, err: LikeboardError) -> LikeboardError {
        if err.is_store() {
            warn!(action = what, error = %err, "Store rejected change; keeping local state");
            let message = format!("Could not {}: {}", what, err.user_message());
            self.notices.push(Notice::warning(message));
        }
        err
    }
}
