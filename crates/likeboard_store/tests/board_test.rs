//! Tests for PlatformBoard against the in-memory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::StreamExt;
use likeboard_core::{NewPost, Platform, Post, PostEdit};
use likeboard_error::{LikeboardResult, StoreError, StoreErrorKind};
use likeboard_store::{
    InMemoryPostRepository, PlatformBoard, PostRepository, SnapshotPersistence,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Persistence that can be switched into a failing state.
#[derive(Debug, Default)]
struct FlakyPersistence {
    offline: AtomicBool,
}

impl FlakyPersistence {
    fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl SnapshotPersistence for FlakyPersistence {
    async fn save(&self, _posts: &[Post]) -> LikeboardResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::new(StoreErrorKind::Unavailable("offline".to_string())).into());
        }
        Ok(())
    }

    async fn load(&self) -> LikeboardResult<Vec<Post>> {
        Ok(Vec::new())
    }
}

fn new_post(platform: Platform, description: &str) -> NewPost {
    NewPost::new(
        platform,
        description.to_string(),
        NaiveDate::from_ymd_opt(2025, 8, 29).unwrap(),
        None,
    )
}

#[tokio::test]
async fn test_board_loads_current_posts() {
    let repo = InMemoryPostRepository::new();
    repo.restore(likeboard_core::seed_posts());

    let board = PlatformBoard::open(Arc::new(repo), Platform::Facebook)
        .await
        .unwrap();
    assert_eq!(board.posts().len(), 2);
    assert!(board.posts().iter().all(|p| *p.platform() == Platform::Facebook));
}

#[tokio::test]
async fn test_increment_updates_cache_and_store() {
    let repo = InMemoryPostRepository::new();
    let id = repo.create(new_post(Platform::Instagram, "reel")).await.unwrap();
    let mut board = PlatformBoard::open(Arc::new(repo.clone()), Platform::Instagram)
        .await
        .unwrap();

    let post = board.increment_comments(&id).await.unwrap();
    assert_eq!(*post.total_comments(), 1);
    assert!(board.status(&id).unwrap().is_like_due);

    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(*stored.total_comments(), 1);
}

#[tokio::test]
async fn test_decrement_at_zero_is_noop() {
    let repo = InMemoryPostRepository::new();
    let id = repo.create(new_post(Platform::X, "thread")).await.unwrap();
    let mut board = PlatformBoard::open(Arc::new(repo.clone()), Platform::X)
        .await
        .unwrap();

    let post = board.decrement_comments(&id).await.unwrap();
    assert_eq!(*post.total_comments(), 0);
    let post = board.decrement_likes(&id).await.unwrap();
    assert_eq!(*post.moderator_likes(), 0);
}

#[tokio::test]
async fn test_reset_zeroes_both_counters() {
    let repo = InMemoryPostRepository::new();
    repo.restore(likeboard_core::seed_posts());
    let mut board = PlatformBoard::open(Arc::new(repo), Platform::Instagram)
        .await
        .unwrap();

    let id = board.posts()[0].id().clone();
    let post = board.reset_counters(&id).await.unwrap();
    assert_eq!((*post.total_comments(), *post.moderator_likes()), (0, 0));
    assert_eq!(board.status(&id).unwrap().likes_owed, 0);
}

#[tokio::test]
async fn test_create_then_delete_leaves_set_unchanged() {
    let repo = InMemoryPostRepository::new();
    repo.restore(likeboard_core::seed_posts());
    let mut board = PlatformBoard::open(Arc::new(repo), Platform::Facebook)
        .await
        .unwrap();
    let before = board.posts().to_vec();

    let id = board
        .create_post(new_post(Platform::Facebook, "temporary"))
        .await
        .unwrap();
    assert_eq!(board.posts().len(), before.len() + 1);
    assert_eq!(board.posts()[0].id(), &id);

    board.delete_post(&id).await.unwrap();
    assert_eq!(board.posts(), before.as_slice());
}

#[tokio::test]
async fn test_edit_keeps_counters() {
    let repo = InMemoryPostRepository::new();
    repo.restore(likeboard_core::seed_posts());
    let mut board = PlatformBoard::open(Arc::new(repo), Platform::LinkedIn)
        .await
        .unwrap();
    let original = board.posts()[0].clone();

    let edit = PostEdit::from_post(&original).with_description("Updated".to_string());
    let edited = board.edit_post(original.id(), edit).await.unwrap();

    assert_eq!(edited.description(), "Updated");
    assert_eq!(edited.total_comments(), original.total_comments());
    assert_eq!(edited.moderator_likes(), original.moderator_likes());
}

#[tokio::test]
async fn test_edit_rejects_empty_description() {
    let repo = InMemoryPostRepository::new();
    repo.restore(likeboard_core::seed_posts());
    let mut board = PlatformBoard::open(Arc::new(repo), Platform::LinkedIn)
        .await
        .unwrap();
    let original = board.posts()[0].clone();

    let edit = PostEdit::from_post(&original).with_description("   ".to_string());
    assert!(board.edit_post(original.id(), edit).await.is_err());
    assert_eq!(board.posts()[0], original);
    assert!(board.notices().is_empty());
}

#[tokio::test]
async fn test_failed_update_keeps_cache_and_records_notice() {
    let persistence = Arc::new(FlakyPersistence::default());
    let repo = InMemoryPostRepository::with_persistence(persistence.clone());
    let id = repo.create(new_post(Platform::TikTok, "dance")).await.unwrap();
    let mut board = PlatformBoard::open(Arc::new(repo.clone()), Platform::TikTok)
        .await
        .unwrap();
    let before = board.posts().to_vec();

    persistence.go_offline();
    let err = board.increment_comments(&id).await.unwrap_err();
    assert!(err.is_store());

    assert_eq!(board.posts(), before.as_slice());
    assert_eq!(*repo.get(&id).await.unwrap().unwrap().total_comments(), 0);

    let notices = board.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].to_string().starts_with("Warning: Could not add a comment"));
    assert!(notices[0].message().starts_with("Could not add a comment"));
    assert!(board.notices().is_empty());
}

#[tokio::test]
async fn test_stale_boards_last_write_wins() {
    let repo = InMemoryPostRepository::new();
    let id = repo.create(new_post(Platform::Facebook, "shared")).await.unwrap();
    let shared: Arc<dyn PostRepository> = Arc::new(repo.clone());

    let mut first = PlatformBoard::open(shared.clone(), Platform::Facebook)
        .await
        .unwrap();
    let mut second = PlatformBoard::open(shared, Platform::Facebook)
        .await
        .unwrap();

    first.increment_comments(&id).await.unwrap();
    second.increment_comments(&id).await.unwrap();

    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(*stored.total_comments(), 1);
}

#[tokio::test]
async fn test_refresh_picks_up_other_writers() {
    let repo = InMemoryPostRepository::new();
    let id = repo.create(new_post(Platform::Facebook, "shared")).await.unwrap();
    let mut board = PlatformBoard::open(Arc::new(repo.clone()), Platform::Facebook)
        .await
        .unwrap();
    assert!(!board.refresh());

    let current = repo.get(&id).await.unwrap().unwrap();
    repo.update(&id, current.with_counters(6, 2)).await.unwrap();

    assert!(board.refresh());
    assert_eq!(*board.post(&id).unwrap().total_comments(), 6);
}

#[tokio::test]
async fn test_switch_platform_drops_old_subscription() {
    let repo = InMemoryPostRepository::new();
    let mut board = PlatformBoard::open(Arc::new(repo.clone()), Platform::Facebook)
        .await
        .unwrap();
    assert_eq!(repo.subscriber_count(Platform::Facebook), 1);

    board.switch_platform(Platform::Instagram).await.unwrap();
    assert_eq!(board.platform(), Platform::Instagram);
    assert_eq!(repo.subscriber_count(Platform::Facebook), 0);
    assert_eq!(repo.subscriber_count(Platform::Instagram), 1);

    drop(board);
    assert_eq!(repo.subscriber_count(Platform::Instagram), 0);
}

#[tokio::test]
async fn test_other_platform_subscribers_not_notified() {
    let repo = InMemoryPostRepository::new();
    let instagram = repo.subscribe(Platform::Instagram).await.unwrap();
    let facebook = repo.subscribe(Platform::Facebook).await.unwrap();

    repo.create(new_post(Platform::Facebook, "only here"))
        .await
        .unwrap();

    assert!(facebook.has_changed());
    assert!(!instagram.has_changed());
    assert!(instagram.current().is_empty());
}

#[tokio::test]
async fn test_subscription_stream_yields_snapshots() {
    let repo = InMemoryPostRepository::new();
    let subscription = repo.subscribe(Platform::LinkedIn).await.unwrap();
    let mut stream = Box::pin(subscription.into_stream());

    let initial = stream.next().await.unwrap();
    assert!(initial.is_empty());

    repo.create(new_post(Platform::LinkedIn, "hiring"))
        .await
        .unwrap();
    let next = stream.next().await.unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].description(), "hiring");
}

#[tokio::test]
async fn test_changed_waits_for_next_snapshot() {
    let repo = InMemoryPostRepository::new();
    let mut board = PlatformBoard::open(Arc::new(repo.clone()), Platform::X)
        .await
        .unwrap();

    let writer = repo.clone();
    let handle = tokio::spawn(async move {
        writer.create(new_post(Platform::X, "async")).await.unwrap();
    });

    board.changed().await.unwrap();
    handle.await.unwrap();
    assert_eq!(board.posts().len(), 1);
}
