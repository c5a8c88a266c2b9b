//! Post storage for the Likeboard dashboard.
//!
//! The store owns the authoritative post set and pushes full per-platform
//! snapshots to subscribers on every change. Presentation layers work through
//! a [`PlatformBoard`], which caches the snapshot of the platform being viewed
//! and turns failed writes into non-fatal [`Notice`]s.
//!
//! Writes are last-write-wins: a board mutates its cached copy of a post and
//! sends the whole record back, with no version check.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod in_memory;
mod json_file;
mod notice;
mod persistence;
mod repository;
mod subscription;

pub use board::PlatformBoard;
pub use in_memory::InMemoryPostRepository;
pub use json_file::{JsonFilePersistence, JsonFilePostRepository};
pub use notice::Notice;
pub use persistence::SnapshotPersistence;
pub use repository::PostRepository;
pub use subscription::PostSubscription;
