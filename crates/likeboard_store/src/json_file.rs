//! JSON file persistence.

use crate::{InMemoryPostRepository, PostRepository, PostSubscription, SnapshotPersistence};
use async_trait::async_trait;
use likeboard_core::{NewPost, Platform, Post, PostId};
use likeboard_error::{LikeboardResult, StoreError, StoreErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPosts {
    version: u32,
    posts: Vec<Post>,
}

/// Saves the collection to a single JSON file.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a crash mid-write leaves the previous file intact.
#[derive(Debug, Clone, derive_new::new)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotPersistence for JsonFilePersistence {
    #[instrument(skip(self, posts), fields(path = %self.path.display(), count = posts.len()))]
    async fn save(&self, posts: &[Post]) -> LikeboardResult<()> {
        let stored = StoredPosts {
            version: FORMAT_VERSION,
            posts: posts.to_vec(),
        };
        let json = serde_json::to_vec_pretty(&stored).map_err(StoreError::from)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StoreError::from)?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await.map_err(StoreError::from)?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(StoreError::from)?;

        debug!("Saved posts");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> LikeboardResult<Vec<Post>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No data file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::from(e).into()),
        };

        let stored: StoredPosts = serde_json::from_slice(&bytes).map_err(StoreError::from)?;
        if stored.version != FORMAT_VERSION {
            return Err(StoreError::new(StoreErrorKind::Serialization(format!(
                "unsupported data file version {} (expected {})",
                stored.version, FORMAT_VERSION
            )))
            .into());
        }
        debug!(version = stored.version, count = stored.posts.len(), "Loaded posts");
        Ok(stored.posts)
    }
}

/// Post repository kept in memory and mirrored to a JSON file.
///
/// A mutation is only published to subscribers after the file write
/// succeeds; on failure the previous state stays in place.
#[derive(Debug, Clone)]
pub struct JsonFilePostRepository {
    inner: InMemoryPostRepository,
    persistence: Arc<JsonFilePersistence>,
}

impl JsonFilePostRepository {
    /// Open the repository, loading existing posts from `path` if present.
    ///
    /// # Errors
    ///
    /// Returns a store error if the file exists but cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> LikeboardResult<Self> {
        let persistence = Arc::new(JsonFilePersistence::new(path.as_ref().to_path_buf()));
        let posts = persistence.load().await?;
        let inner = InMemoryPostRepository::with_persistence(persistence.clone());
        inner.restore(posts);

        info!(posts = inner.len(), "Opened post file");
        Ok(Self { inner, persistence })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        self.persistence.path()
    }

    /// The in-memory state behind this repository.
    pub fn in_memory(&self) -> &InMemoryPostRepository {
        &self.inner
    }

    /// Whether no platform has posts.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    async fn create(&self, new_post: NewPost) -> LikeboardResult<PostId> {
        self.inner.create(new_post).await
    }

    async fn insert(&self, post: Post) -> LikeboardResult<()> {
        self.inner.insert(post).await
    }

    async fn subscribe(&self, platform: Platform) -> LikeboardResult<PostSubscription> {
        self.inner.subscribe(platform).await
    }

    async fn update(&self, id: &PostId, post: Post) -> LikeboardResult<()> {
        self.inner.update(id, post).await
    }

    async fn delete(&self, id: &PostId) -> LikeboardResult<()> {
        self.inner.delete(id).await
    }

    async fn get(&self, id: &PostId) -> LikeboardResult<Option<Post>> {
        self.inner.get(id).await
    }

    async fn list(&self, platform: Platform) -> LikeboardResult<Vec<Post>> {
        self.inner.list(platform).await
    }
}
