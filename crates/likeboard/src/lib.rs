//! Social like dashboard.
//!
//! Moderators record comments on posts across five platforms and add one
//! like for every three comments. This crate wires the store, the
//! dashboard and a scriptable command line together.
//!
//! # Example
//!
//! ```no_run
//! use likeboard::cli::handle_ratio;
//! use likeboard_core::{RoleGate, UserRole};
//!
//! let text = handle_ratio(&RoleGate::new(UserRole::Moderator), "7", false).unwrap();
//! assert!(text.contains("Likes owed: 3"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;

pub use config::{ENV_PREFIX, LikeboardConfig};
