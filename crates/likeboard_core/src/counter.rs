//! Counter mutations applied by moderators.

use crate::{ModerationAction, Post};

/// A single counter adjustment.
///
/// Each action produces a full replacement record; the caller persists the
/// whole post keyed by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum CounterAction {
    /// Add one comment
    IncrementComments,
    /// Add one moderator like
    IncrementLikes,
    /// Remove one comment, stopping at zero
    DecrementComments,
    /// Remove one moderator like, stopping at zero
    DecrementLikes,
    /// Zero both counters together
    Reset,
}

impl CounterAction {
    /// Replacement record with this action applied.
    pub fn apply(self, post: &Post) -> Post {
        let mut next = post.clone();
        let comments = *post.total_comments();
        let likes = *post.moderator_likes();
        match self {
            CounterAction::IncrementComments => {
                next.set_total_comments(comments.saturating_add(1))
            }
            CounterAction::IncrementLikes => next.set_moderator_likes(likes.saturating_add(1)),
            CounterAction::DecrementComments => {
                next.set_total_comments(comments.saturating_sub(1))
            }
            CounterAction::DecrementLikes => next.set_moderator_likes(likes.saturating_sub(1)),
            CounterAction::Reset => {
                next.set_total_comments(0);
                next.set_moderator_likes(0);
            }
        }
        next
    }

    /// Short human description, e.g. for status messages.
    pub fn label(self) -> &'static str {
        match self {
            CounterAction::IncrementComments => "add a comment",
            CounterAction::IncrementLikes => "add a like",
            CounterAction::DecrementComments => "remove a comment",
            CounterAction::DecrementLikes => "remove a like",
            CounterAction::Reset => "reset counters",
        }
    }

    /// The role-gated action this adjustment corresponds to.
    pub fn moderation_action(self) -> ModerationAction {
        match self {
            CounterAction::IncrementComments => ModerationAction::IncrementComments,
            CounterAction::IncrementLikes => ModerationAction::IncrementLikes,
            CounterAction::DecrementComments => ModerationAction::DecrementComments,
            CounterAction::DecrementLikes => ModerationAction::DecrementLikes,
            CounterAction::Reset => ModerationAction::ResetCounters,
        }
    }
}
