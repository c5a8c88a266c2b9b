//! Tests for the command handlers against the in-memory store.

use chrono::NaiveDate;
use config::Environment;
use likeboard::cli::{
    Commands, execute, handle_add, handle_counter, handle_delete, handle_edit, handle_list,
    handle_ratio, handle_reset, handle_seed, handle_status, is_store_empty,
};
use likeboard::{ENV_PREFIX, LikeboardConfig};
use likeboard_core::{CounterAction, NewPost, Platform, PostId, RoleGate, UserRole};
use likeboard_error::LikeboardErrorKind;
use likeboard_store::{InMemoryPostRepository, PostRepository};
use std::collections::HashMap;
use std::sync::Arc;

fn admin() -> RoleGate {
    RoleGate::new(UserRole::Admin)
}

fn moderator() -> RoleGate {
    RoleGate::new(UserRole::Moderator)
}

async fn repo_with_post(comments: u32, likes: u32) -> (InMemoryPostRepository, PostId) {
    let repo = InMemoryPostRepository::new();
    let id = repo
        .create(NewPost::new(
            Platform::Facebook,
            "Launch recap".to_string(),
            NaiveDate::from_ymd_opt(2025, 8, 26).unwrap(),
            None,
        ))
        .await
        .unwrap();
    if comments > 0 || likes > 0 {
        let post = repo.get(&id).await.unwrap().unwrap();
        repo.update(&id, post.with_counters(comments, likes))
            .await
            .unwrap();
    }
    (repo, id)
}

#[test]
fn test_ratio_text() {
    let zero = handle_ratio(&moderator(), "0", false).unwrap();
    assert!(zero.contains("Likes owed: 0"));
    assert!(zero.contains("3 comment(s) to the next like"));

    let first = handle_ratio(&moderator(), "1", false).unwrap();
    assert!(first.contains("Likes owed: 1"));
    assert!(first.contains("Time to like!"));

    let five = handle_ratio(&moderator(), "5", false).unwrap();
    assert!(five.contains("Likes owed: 2"));
    assert!(five.contains("Progress: 33.3%"));
    assert!(five.contains("2 comment(s) to the next like"));
}

#[test]
fn test_ratio_negative_count_is_clamped() {
    let text = handle_ratio(&admin(), "-4", false).unwrap();
    assert!(text.starts_with("Comments: 0"));
}

#[test]
fn test_ratio_rejects_text() {
    let err = handle_ratio(&admin(), "twelve", false).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_ratio_json() {
    let text = handle_ratio(&admin(), "7", true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["likesOwed"], 3);
    assert_eq!(value["commentsUntilNextLike"], 3);
    assert_eq!(value["isLikeDue"], true);
}

#[tokio::test]
async fn test_moderator_comment_increments() {
    let (repo, id) = repo_with_post(0, 0).await;

    let text = handle_counter(&repo, &moderator(), id.as_str(), CounterAction::IncrementComments)
        .await
        .unwrap();

    assert!(text.contains("Comments: 1  Likes: 0"));
    assert!(text.contains("Time to like!"));
    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(*stored.total_comments(), 1);
}

#[tokio::test]
async fn test_moderator_cannot_remove_comment() {
    let (repo, id) = repo_with_post(4, 1).await;

    let err = handle_counter(&repo, &moderator(), id.as_str(), CounterAction::DecrementComments)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), LikeboardErrorKind::Permission(_)));
    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(*stored.total_comments(), 4);
}

#[tokio::test]
async fn test_remove_at_zero_changes_nothing() {
    let (repo, id) = repo_with_post(0, 0).await;

    let text = handle_counter(&repo, &admin(), id.as_str(), CounterAction::DecrementLikes)
        .await
        .unwrap();

    assert!(text.starts_with("No likes to remove"));
    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(*stored.moderator_likes(), 0);
}

#[tokio::test]
async fn test_status_reports_like_gap() {
    let (repo, id) = repo_with_post(17, 5).await;

    let text = handle_status(&repo, &moderator(), id.as_str()).await.unwrap();

    assert!(text.contains("Likes by rule (1/3): 6"));
    assert!(text.contains("1 like(s) behind"));
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let repo = InMemoryPostRepository::new();

    let err = handle_status(&repo, &admin(), "missing").await.unwrap_err();

    assert!(err.is_store());
    assert!(err.user_message().contains("Post not found: missing"));
}

#[tokio::test]
async fn test_add_then_list() {
    let repo = InMemoryPostRepository::new();

    let text = handle_add(
        &repo,
        &admin(),
        Platform::TikTok,
        "  Dance challenge  ".to_string(),
        Some("2025-09-01".to_string()),
        Some("https://picsum.photos/seed/tt/300/500".to_string()),
    )
    .await
    .unwrap();
    assert!(text.starts_with("Created post"));
    assert!(text.ends_with("on TikTok"));

    let listing = handle_list(&repo, &moderator(), Some(Platform::TikTok))
        .await
        .unwrap();
    assert!(listing.starts_with("== TikTok (1) =="));
    assert!(listing.contains("01/09/2025"));
    assert!(listing.ends_with("Dance challenge"));
}

#[tokio::test]
async fn test_add_rejects_bad_input() {
    let repo = InMemoryPostRepository::new();

    let empty = handle_add(&repo, &admin(), Platform::X, "   ".to_string(), None, None)
        .await
        .unwrap_err();
    assert!(empty.is_validation());

    let bad_date = handle_add(
        &repo,
        &admin(),
        Platform::X,
        "Thread".to_string(),
        Some("01/09/2025".to_string()),
        None,
    )
    .await
    .unwrap_err();
    assert!(bad_date.is_validation());
    assert!(is_store_empty(&repo).await.unwrap());
}

#[tokio::test]
async fn test_moderator_cannot_add() {
    let repo = InMemoryPostRepository::new();

    let err = handle_add(&repo, &moderator(), Platform::X, "Thread".to_string(), None, None)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Moderator may not create_post");
}

#[tokio::test]
async fn test_edit_keeps_counters() {
    let (repo, id) = repo_with_post(8, 3).await;

    handle_edit(
        &repo,
        &admin(),
        id.as_str(),
        Some("Launch recap, updated".to_string()),
        None,
        None,
        false,
    )
    .await
    .unwrap();

    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.description(), "Launch recap, updated");
    assert_eq!(*stored.total_comments(), 8);
    assert_eq!(*stored.moderator_likes(), 3);
}

#[tokio::test]
async fn test_edit_rejects_empty_description() {
    let (repo, id) = repo_with_post(0, 0).await;

    let err = handle_edit(&repo, &admin(), id.as_str(), Some(String::new()), None, None, false)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.description(), "Launch recap");
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (repo, id) = repo_with_post(0, 0).await;

    let err = handle_delete(&repo, &admin(), id.as_str(), false)
        .await
        .unwrap_err();
    assert!(err.user_message().contains("--yes"));
    assert!(repo.get(&id).await.unwrap().is_some());

    handle_delete(&repo, &admin(), id.as_str(), true).await.unwrap();
    assert!(repo.get(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_reset() {
    let (repo, id) = repo_with_post(5, 2).await;

    assert!(
        handle_reset(&repo, &admin(), id.as_str(), false)
            .await
            .unwrap_err()
            .is_validation()
    );

    handle_reset(&repo, &admin(), id.as_str(), true).await.unwrap();
    let stored = repo.get(&id).await.unwrap().unwrap();
    assert!(!stored.has_counts());

    let again = handle_reset(&repo, &admin(), id.as_str(), false)
        .await
        .unwrap();
    assert!(again.ends_with("are already zero"));
}

#[tokio::test]
async fn test_seed_refuses_populated_store() {
    let repo = InMemoryPostRepository::new();

    let text = handle_seed(&repo, &admin(), false).await.unwrap();
    assert_eq!(text, "Added 4 demonstration posts");
    assert_eq!(repo.list(Platform::Facebook).await.unwrap().len(), 2);

    assert!(handle_seed(&repo, &admin(), false).await.is_err());
    assert_eq!(repo.len(), 4);

    handle_seed(&repo, &admin(), true).await.unwrap();
    assert_eq!(repo.len(), 8);
}

#[tokio::test]
async fn test_list_all_on_empty_store() {
    let repo = InMemoryPostRepository::new();

    let text = handle_list(&repo, &moderator(), None).await.unwrap();

    assert_eq!(text.matches("No posts found").count(), 5);
    assert!(text.contains("Add your first post for LinkedIn!"));
}

#[tokio::test]
async fn test_execute_dispatches_like() {
    let config = LikeboardConfig::load_with_env(
        None,
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new())),
    )
    .unwrap();
    let (repo, id) = repo_with_post(3, 0).await;
    let repo = Arc::new(repo);

    let text = execute(
        Commands::Like {
            id: id.to_string(),
            remove: false,
        },
        repo.clone(),
        UserRole::Moderator,
        &config,
    )
    .await
    .unwrap();

    assert!(text.contains("Likes: 1"));
    let stored = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(*stored.moderator_likes(), 1);
}
