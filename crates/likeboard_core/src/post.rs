//! The post record and its creation and edit payloads.

use crate::{LikeStatus, Platform, compute_like_status};
use chrono::NaiveDate;
use likeboard_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Opaque post identifier.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A tracked social post.
///
/// `id` and `platform` are fixed at creation. Counters are unsigned and only
/// ever decremented with saturation, so they never go below zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use likeboard_core::{NewPost, Platform, Post, PostId};
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 26).unwrap();
/// let post = Post::from_new(
///     PostId::from("fb1"),
///     NewPost::new(Platform::Facebook, "Event recap".to_string(), date, None),
/// )
/// .with_counters(17, 5);
///
/// assert_eq!(post.like_status().likes_owed, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier assigned by the store
    id: PostId,
    /// Platform this post belongs to
    platform: Platform,
    /// Free-text description
    description: String,
    /// Publication date, display only
    date: NaiveDate,
    /// External URL or inline data URL
    #[serde(default)]
    image_url: Option<String>,
    /// Comments recorded by moderators
    #[serde(default)]
    total_comments: u32,
    /// Likes actually applied by moderators
    #[serde(default)]
    moderator_likes: u32,
}

impl Post {
    /// Build a stored post from a creation payload, counters at zero.
    pub fn from_new(id: PostId, new_post: NewPost) -> Self {
        Self {
            id,
            platform: new_post.platform,
            description: new_post.description,
            date: new_post.date,
            image_url: new_post.image_url,
            total_comments: 0,
            moderator_likes: 0,
        }
    }

    /// Same post with both counters replaced.
    pub fn with_counters(mut self, total_comments: u32, moderator_likes: u32) -> Self {
        self.total_comments = total_comments;
        self.moderator_likes = moderator_likes;
        self
    }

    /// Same post with description, date, and image replaced.
    pub fn with_edit(&self, edit: PostEdit) -> Self {
        Self {
            description: edit.description,
            date: edit.date,
            image_url: edit.image_url,
            ..self.clone()
        }
    }

    /// Like status for the current comment count.
    pub fn like_status(&self) -> LikeStatus {
        compute_like_status(self.total_comments)
    }

    /// Date in day/month/year form.
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Whether either counter is non-zero.
    pub fn has_counts(&self) -> bool {
        self.total_comments > 0 || self.moderator_likes > 0
    }

    pub(crate) fn set_total_comments(&mut self, value: u32) {
        self.total_comments = value;
    }

    pub(crate) fn set_moderator_likes(&mut self, value: u32) {
        self.moderator_likes = value;
    }
}

/// Payload for creating a post.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Platform the post belongs to
    platform: Platform,
    /// Free-text description
    description: String,
    /// Publication date
    date: NaiveDate,
    /// Optional image reference
    image_url: Option<String>,
}

impl NewPost {
    /// Reject an empty description.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_description(&self.description)
    }
}

/// Editable fields of a post.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
    derive_setters::Setters,
)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_")]
pub struct PostEdit {
    /// Free-text description
    description: String,
    /// Publication date
    date: NaiveDate,
    /// Optional image reference
    image_url: Option<String>,
}

impl PostEdit {
    /// Edit payload pre-filled from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            description: post.description.clone(),
            date: post.date,
            image_url: post.image_url.clone(),
        }
    }

    /// Reject an empty description.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_description(&self.description)
    }
}

#[track_caller]
fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyDescription));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        let date = NaiveDate::from_ymd_opt(2025, 8, 24).unwrap();
        Post::from_new(
            PostId::from("li1"),
            NewPost::new(
                Platform::LinkedIn,
                "New partnership".to_string(),
                date,
                Some("https://picsum.photos/seed/li1/600/314".to_string()),
            ),
        )
    }

    #[test]
    fn test_new_post_starts_at_zero() {
        let post = sample();
        assert_eq!(*post.total_comments(), 0);
        assert_eq!(*post.moderator_likes(), 0);
        assert!(!post.has_counts());
    }

    #[test]
    fn test_edit_keeps_identity_and_counters() {
        let post = sample().with_counters(56, 19);
        let edit = PostEdit::from_post(&post)
            .with_description("Updated".to_string())
            .with_image_url(None);
        let edited = post.with_edit(edit);

        assert_eq!(edited.id(), post.id());
        assert_eq!(edited.platform(), post.platform());
        assert_eq!(*edited.total_comments(), 56);
        assert_eq!(*edited.moderator_likes(), 19);
        assert_eq!(edited.description(), "Updated");
        assert!(edited.image_url().is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let post = sample().with_counters(2, 1);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["totalComments"], 2);
        assert_eq!(json["moderatorLikes"], 1);
        assert_eq!(json["date"], "2025-08-24");
        assert_eq!(json["platform"], "LinkedIn");
        assert_eq!(json["id"], "li1");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(sample().display_date(), "24/08/2025");
    }

    #[test]
    fn test_blank_description_rejected() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let new_post = NewPost::new(Platform::X, "   ".to_string(), date, None);
        let err = new_post.validate().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyDescription);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(PostId::generate(), PostId::generate());
    }
}
