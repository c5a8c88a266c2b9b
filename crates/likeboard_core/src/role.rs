//! Dashboard roles and the actions each role is offered.
//!
//! Gating here is advisory: presentation layers use it to decide which
//! controls to show. The store accepts any mutation from any caller.

use likeboard_error::PermissionError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who is driving the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum UserRole {
    /// Full control over posts and counters
    #[default]
    Admin,
    /// May add comments and likes and read the status
    Moderator,
}

impl UserRole {
    /// The other role.
    pub fn toggled(self) -> UserRole {
        match self {
            UserRole::Admin => UserRole::Moderator,
            UserRole::Moderator => UserRole::Admin,
        }
    }

    /// Whether this role is offered the given action.
    pub fn permits(self, action: ModerationAction) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Moderator => matches!(
                action,
                ModerationAction::IncrementComments
                    | ModerationAction::IncrementLikes
                    | ModerationAction::ViewStatus
            ),
        }
    }
}

/// Operations exposed by the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ModerationAction {
    /// Record one more comment
    IncrementComments,
    /// Record one more moderator like
    IncrementLikes,
    /// Remove one comment
    DecrementComments,
    /// Remove one moderator like
    DecrementLikes,
    /// Zero both counters
    ResetCounters,
    /// Add a post
    CreatePost,
    /// Change description, date, or image
    EditPost,
    /// Remove a post
    DeletePost,
    /// Read counters and like status
    ViewStatus,
}

/// Checks actions against the active role.
#[derive(Debug, Clone, Copy, derive_new::new)]
pub struct RoleGate {
    role: UserRole,
}

impl RoleGate {
    /// Active role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Whether the action is offered.
    pub fn allows(&self, action: ModerationAction) -> bool {
        self.role.permits(action)
    }

    /// Refuse the action with a [`PermissionError`] if it is not offered.
    #[instrument(skip(self), fields(role = %self.role))]
    pub fn check(&self, action: ModerationAction) -> Result<(), PermissionError> {
        if self.role.permits(action) {
            debug!("Action permitted");
            Ok(())
        } else {
            debug!("Action not offered to role");
            Err(PermissionError::new(
                self.role.to_string(),
                action.to_string(),
            ))
        }
    }
}
