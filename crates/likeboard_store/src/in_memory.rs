//! Watch-channel backed post store.
//!
//! Each platform owns one `watch` channel whose value is the platform's full
//! post list, newest first. Writers are serialized by a single lock; readers
//! never block writers for longer than a clone.

use crate::{PostRepository, PostSubscription, SnapshotPersistence};
use async_trait::async_trait;
use likeboard_core::{NewPost, Platform, Post, PostId};
use likeboard_error::{
    LikeboardResult, StoreError, StoreErrorKind, ValidationError, ValidationErrorKind,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument};

/// In-memory repository holding the authoritative post set.
///
/// Clones share the same state. All data is lost when the last clone is
/// dropped unless a [`SnapshotPersistence`] is attached.
///
/// # Example
/// ```no_run
/// use likeboard_store::{InMemoryPostRepository, PostRepository};
/// use likeboard_core::Platform;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = InMemoryPostRepository::new();
///     let subscription = repo.subscribe(Platform::Instagram).await.unwrap();
///     assert!(subscription.current().is_empty());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryPostRepository {
    /// One channel per platform, created up front
    channels: Arc<HashMap<Platform, watch::Sender<Vec<Post>>>>,
    /// Serializes writers
    write_lock: Arc<Mutex<()>>,
    /// Optional durable copy, saved before each change is published
    persistence: Option<Arc<dyn SnapshotPersistence>>,
}

impl InMemoryPostRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        let channels = Platform::all()
            .into_iter()
            .map(|platform| (platform, watch::channel(Vec::new()).0))
            .collect();
        Self {
            channels: Arc::new(channels),
            write_lock: Arc::new(Mutex::new(())),
            persistence: None,
        }
    }

    /// Create an empty repository that saves through `persistence`.
    pub fn with_persistence(persistence: Arc<dyn SnapshotPersistence>) -> Self {
        Self {
            persistence: Some(persistence),
            ..Self::new()
        }
    }

    /// Replace every platform's posts without saving, e.g. after a load.
    #[instrument(skip_all, fields(count = posts.len()))]
    pub fn restore(&self, posts: Vec<Post>) {
        let mut grouped: HashMap<Platform, Vec<Post>> = HashMap::new();
        for post in posts {
            grouped.entry(*post.platform()).or_default().push(post);
        }
        for (platform, sender) in self.channels.iter() {
            sender.send_replace(grouped.remove(platform).unwrap_or_default());
        }
        debug!("Restored post collection");
    }

    /// All posts, grouped in tab order.
    pub fn snapshot(&self) -> Vec<Post> {
        Platform::all()
            .into_iter()
            .flat_map(|platform| self.channel(platform).borrow().clone())
            .collect()
    }

    /// Total number of posts.
    pub fn len(&self) -> usize {
        self.channels.values().map(|s| s.borrow().len()).sum()
    }

    /// Whether no platform has posts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live subscriptions on a platform.
    pub fn subscriber_count(&self, platform: Platform) -> usize {
        self.channel(platform).receiver_count()
    }

    fn channel(&self, platform: Platform) -> &watch::Sender<Vec<Post>> {
        // Every platform is inserted by `new`.
        &self.channels[&platform]
    }

    fn locate(&self, id: &PostId) -> Option<Platform> {
        Platform::all().into_iter().find(|platform| {
            self.channel(*platform)
                .borrow()
                .iter()
                .any(|post| post.id() == id)
        })
    }

    /// Apply `op` to a copy of one platform's list, save, then publish.
    async fn commit<T, F>(&self, platform: Platform, op: F) -> LikeboardResult<T>
    where
        F: FnOnce(&mut Vec<Post>) -> LikeboardResult<T> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut next = self.channel(platform).borrow().clone();
        let value = op(&mut next)?;

        if let Some(persistence) = &self.persistence {
            let all: Vec<Post> = Platform::all()
                .into_iter()
                .flat_map(|p| {
                    if p == platform {
                        next.clone()
                    } else {
                        self.channel(p).borrow().clone()
                    }
                })
                .collect();
            persistence.save(&all).await?;
        }

        self.channel(platform).send_replace(next);
        Ok(value)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    #[instrument(skip(self, new_post), fields(platform = %new_post.platform()))]
    async fn create(&self, new_post: NewPost) -> LikeboardResult<PostId> {
        new_post.validate()?;
        let id = PostId::generate();
        let post = Post::from_new(id.clone(), new_post);
        let platform = *post.platform();

        self.commit(platform, move |posts| {
            posts.insert(0, post);
            Ok(())
        })
        .await?;

        info!(id = %id, "Created post");
        Ok(id)
    }

    #[instrument(skip(self, post), fields(id = %post.id(), platform = %post.platform()))]
    async fn insert(&self, post: Post) -> LikeboardResult<()> {
        let platform = *post.platform();
        self.commit(platform, move |posts| {
            if self.locate(post.id()).is_some() {
                return Err(ValidationError::new(ValidationErrorKind::ImmutableField(
                    "id".to_string(),
                ))
                .into());
            }
            posts.push(post);
            Ok(())
        })
        .await
    }

    async fn subscribe(&self, platform: Platform) -> LikeboardResult<PostSubscription> {
        debug!(%platform, "New subscription");
        Ok(PostSubscription::new(
            platform,
            self.channel(platform).subscribe(),
        ))
    }

    #[instrument(skip(self, post), fields(id = %id))]
    async fn update(&self, id: &PostId, post: Post) -> LikeboardResult<()> {
        if post.id() != id {
            return Err(ValidationError::new(ValidationErrorKind::ImmutableField(
                "id".to_string(),
            ))
            .into());
        }

        let home = self.locate(id).ok_or_else(|| StoreError::not_found(id))?;
        if home != *post.platform() {
            return Err(ValidationError::new(ValidationErrorKind::ImmutableField(
                "platform".to_string(),
            ))
            .into());
        }

        let target = id.clone();
        self.commit(home, move |posts| {
            let slot = posts
                .iter_mut()
                .find(|p| *p.id() == target)
                .ok_or_else(|| StoreError::not_found(&target))?;
            *slot = post;
            Ok(())
        })
        .await?;

        debug!("Updated post");
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &PostId) -> LikeboardResult<()> {
        let home = self.locate(id).ok_or_else(|| StoreError::not_found(id))?;
        let target = id.clone();
        self.commit(home, move |posts| {
            let before = posts.len();
            posts.retain(|p| *p.id() != target);
            if posts.len() == before {
                return Err(StoreError::new(StoreErrorKind::NotFound(target.to_string())).into());
            }
            Ok(())
        })
        .await?;

        info!("Deleted post");
        Ok(())
    }

    async fn get(&self, id: &PostId) -> LikeboardResult<Option<Post>> {
        Ok(self.locate(id).and_then(|platform| {
            self.channel(platform)
                .borrow()
                .iter()
                .find(|p| p.id() == id)
                .cloned()
        }))
    }

    async fn list(&self, platform: Platform) -> LikeboardResult<Vec<Post>> {
        Ok(self.channel(platform).borrow().clone())
    }
}
