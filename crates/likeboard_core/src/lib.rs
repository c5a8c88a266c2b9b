//! Core data types for the Likeboard engagement dashboard.
//!
//! This crate holds the post record, the platform and role enums, and the
//! like-ratio engine that turns a comment count into a like-debt signal.

mod counter;
mod image;
mod input;
mod observability;
mod platform;
mod post;
mod ratio;
mod role;
mod seed;

pub use counter::CounterAction;
pub use image::{ImageSource, MAX_IMAGE_BYTES};
pub use input::{parse_count, parse_date};
pub use observability::{LogTarget, init_tracing};
pub use platform::Platform;
pub use post::{NewPost, Post, PostEdit, PostId};
pub use ratio::{COMMENTS_PER_LIKE, LikeStatus, compute_like_status};
pub use role::{ModerationAction, RoleGate, UserRole};
pub use seed::seed_posts;
