//! Demonstration posts for an empty store.

use crate::{NewPost, Platform, Post, PostId};
use chrono::NaiveDate;

struct SeedPost {
    platform: Platform,
    description: &'static str,
    date: (i32, u32, u32),
    image_url: &'static str,
    total_comments: u32,
    moderator_likes: u32,
}

const SEED: &[SeedPost] = &[
    SeedPost {
        platform: Platform::Facebook,
        description: "Huge success for our latest event in Milan! Thanks to everyone who came.",
        date: (2025, 8, 26),
        image_url: "https://picsum.photos/seed/fb1/500/300",
        total_comments: 17,
        moderator_likes: 5,
    },
    SeedPost {
        platform: Platform::Facebook,
        description: "Notice: our offices will be closed for holidays from 10 to 20 September.",
        date: (2025, 8, 25),
        image_url: "https://picsum.photos/seed/fb2/500/300",
        total_comments: 8,
        moderator_likes: 3,
    },
    SeedPost {
        platform: Platform::Instagram,
        description: "Behind the scenes of our latest photo shoot. Big news coming soon!",
        date: (2025, 8, 27),
        image_url: "https://picsum.photos/seed/ig1/500/500",
        total_comments: 142,
        moderator_likes: 47,
    },
    SeedPost {
        platform: Platform::LinkedIn,
        description: "We are pleased to announce our new strategic partnership.",
        date: (2025, 8, 24),
        image_url: "https://picsum.photos/seed/li1/600/314",
        total_comments: 56,
        moderator_likes: 19,
    },
];

/// Demonstration posts with fresh ids, newest first within each platform.
pub fn seed_posts() -> Vec<Post> {
    SEED.iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let new_post = NewPost::new(
                seed.platform,
                seed.description.to_string(),
                date,
                Some(seed.image_url.to_string()),
            );
            Some(
                Post::from_new(PostId::generate(), new_post)
                    .with_counters(seed.total_comments, seed.moderator_likes),
            )
        })
        .collect()
}
