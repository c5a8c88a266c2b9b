//! CLI command definitions.

use clap::{Parser, Subcommand};
use likeboard_core::{Platform, UserRole};
use std::path::PathBuf;

/// Likeboard command-line interface.
#[derive(Parser, Debug)]
#[command(name = "likeboard")]
#[command(about = "Track comments and moderator likes across social platforms", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file holding the posts, overriding the configured one
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Act as this role (admin or moderator)
    #[arg(long, global = true)]
    pub role: Option<UserRole>,

    /// Command to run; the dashboard opens when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Open the terminal dashboard
    Tui {
        /// Platform tab to open on
        #[arg(long)]
        platform: Option<Platform>,
    },

    /// Print posts with counters and like status
    List {
        /// Only this platform
        #[arg(long)]
        platform: Option<Platform>,
    },

    /// Print the like status of one post
    Status {
        /// Post id
        id: String,
    },

    /// Evaluate the one-like-per-three-comments rule for a comment count
    Ratio {
        /// Total comments
        #[arg(allow_hyphen_values = true)]
        count: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a post
    Add {
        /// Platform the post belongs to
        #[arg(long)]
        platform: Platform,

        /// Post text
        #[arg(long)]
        description: String,

        /// Publication date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<String>,

        /// Image URL or local image file
        #[arg(long)]
        image: Option<String>,
    },

    /// Change description, date, or image of a post
    Edit {
        /// Post id
        id: String,

        /// New text
        #[arg(long)]
        description: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New image URL or local image file
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Remove the image
        #[arg(long)]
        clear_image: bool,
    },

    /// Record a comment
    Comment {
        /// Post id
        id: String,

        /// Remove one comment instead
        #[arg(long)]
        remove: bool,
    },

    /// Record a moderator like
    Like {
        /// Post id
        id: String,

        /// Remove one like instead
        #[arg(long)]
        remove: bool,
    },

    /// Zero comments and likes of a post
    Reset {
        /// Post id
        id: String,

        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Load the demonstration posts
    Seed {
        /// Add them even if posts already exist
        #[arg(long)]
        force: bool,
    },
}
