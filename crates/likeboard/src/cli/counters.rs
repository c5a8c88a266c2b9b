//! Counter and ratio command handlers.

use super::posts::{fetch, status_report};
use likeboard_core::{CounterAction, ModerationAction, RoleGate, compute_like_status, parse_count};
use likeboard_error::{LikeboardResult, StoreError, ValidationError, ValidationErrorKind};
use likeboard_store::PostRepository;
use tracing::{debug, instrument};

/// Apply one counter change to a post and print its new status.
///
/// Decrements at zero are reported and nothing is written.
#[instrument(skip(repo, gate))]
pub async fn handle_counter(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    id: &str,
    action: CounterAction,
) -> LikeboardResult<String> {
    gate.check(action.moderation_action())?;
    let post = fetch(repo, id).await?;

    let nothing_to_remove = match action {
        CounterAction::DecrementComments => (*post.total_comments() == 0).then_some("comments"),
        CounterAction::DecrementLikes => (*post.moderator_likes() == 0).then_some("likes"),
        _ => None,
    };
    if let Some(what) = nothing_to_remove {
        debug!("Counter already at zero");
        return Ok(format!("No {} to remove on post {}", what, post.id()));
    }

    let next = action.apply(&post);
    repo.update(post.id(), next.clone()).await?;
    Ok(status_report(&next))
}

/// Zero both counters of a post once confirmed.
#[instrument(skip(repo, gate))]
pub async fn handle_reset(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    id: &str,
    yes: bool,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::ResetCounters)?;
    let post = fetch(repo, id).await?;

    if !post.has_counts() {
        return Ok(format!("Counters of post {} are already zero", post.id()));
    }
    if !yes {
        return Err(ValidationError::new(ValidationErrorKind::ConfirmationRequired(
            format!("pass --yes to reset counters of post {}", post.id()),
        ))
        .into());
    }

    let next = CounterAction::Reset.apply(&post);
    repo.update(post.id(), next.clone()).await?;
    Ok(status_report(&next))
}

/// Evaluate the like rule for a raw comment count.
#[instrument(skip(gate))]
pub fn handle_ratio(gate: &RoleGate, count: &str, json: bool) -> LikeboardResult<String> {
    gate.check(ModerationAction::ViewStatus)?;
    let total = parse_count(count)?;
    let status = compute_like_status(total);

    if json {
        return Ok(serde_json::to_string_pretty(&status).map_err(StoreError::from)?);
    }

    let next = if status.is_like_due {
        "Time to like!".to_string()
    } else {
        format!(
            "{} comment(s) to the next like",
            status.comments_until_next_like
        )
    };
    Ok(format!(
        "Comments: {}\nLikes owed: {}\nProgress: {:.1}%\n{}",
        total, status.likes_owed, status.progress_percent, next
    ))
}
