//! Tests for the like-ratio engine and counter rules through the public API.

use chrono::NaiveDate;
use likeboard_core::{
    COMMENTS_PER_LIKE, CounterAction, NewPost, Platform, Post, PostId, compute_like_status,
};

fn fresh_post() -> Post {
    let date = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap();
    Post::from_new(
        PostId::generate(),
        NewPost::new(Platform::TikTok, "Launch teaser".to_string(), date, None),
    )
}

#[test]
fn test_scenario_zero() {
    let status = compute_like_status(0);
    assert_eq!(status.likes_owed, 0);
    assert_eq!(status.comments_until_next_like, 3);
    assert_eq!(status.progress_percent, 0.0);
    assert!(!status.is_like_due);
}

#[test]
fn test_scenario_one() {
    let status = compute_like_status(1);
    assert_eq!(status.likes_owed, 1);
    assert_eq!(status.comments_until_next_like, 3);
    assert_eq!(status.progress_percent, 0.0);
    assert!(status.is_like_due);
}

#[test]
fn test_scenario_five() {
    let status = compute_like_status(5);
    assert_eq!(status.likes_owed, 2);
    assert_eq!(status.comments_until_next_like, 2);
    assert!((status.progress_percent - 33.33).abs() < 0.01);
    assert!(!status.is_like_due);
}

#[test]
fn test_due_iff_congruent_to_one() {
    assert!(!compute_like_status(0).is_like_due);
    for n in 1..1000u32 {
        assert_eq!(compute_like_status(n).is_like_due, n % COMMENTS_PER_LIKE == 1);
    }
}

#[test]
fn test_status_is_recomputed_each_call() {
    let post = fresh_post().with_counters(6, 0);
    let first = post.like_status();
    let second = post.like_status();
    assert_eq!(first, second);

    let bumped = CounterAction::IncrementComments.apply(&post);
    assert_ne!(bumped.like_status(), first);
    assert!(bumped.like_status().is_like_due);
}

#[test]
fn test_seven_sequential_comments() {
    let mut post = fresh_post();
    let mut due = Vec::new();
    for _ in 0..7 {
        post = CounterAction::IncrementComments.apply(&post);
        due.push(post.like_status().is_like_due);
    }
    assert_eq!(due, vec![true, false, false, true, false, false, true]);
}

#[test]
fn test_decrement_idempotent_at_floor() {
    let post = fresh_post();
    let once = CounterAction::DecrementComments.apply(&post);
    let twice = CounterAction::DecrementComments.apply(&once);
    assert_eq!(once, post);
    assert_eq!(twice, post);
}

#[test]
fn test_like_status_serializes_camel_case() {
    let json = serde_json::to_value(compute_like_status(4)).unwrap();
    assert_eq!(json["likesOwed"], 2);
    assert_eq!(json["commentsUntilNextLike"], 3);
    assert_eq!(json["isLikeDue"], true);
}
