//! The 1-like-per-3-comments engine.

use serde::{Deserialize, Serialize};

/// Length of one like cycle, in comments.
pub const COMMENTS_PER_LIKE: u32 = 3;

/// Like-debt signal derived from a comment count.
///
/// # Examples
///
/// ```
/// use likeboard_core::compute_like_status;
///
/// let status = compute_like_status(5);
/// assert_eq!(status.likes_owed, 2);
/// assert_eq!(status.comments_until_next_like, 2);
/// assert!(!status.is_like_due);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    /// Likes that should have been applied so far
    pub likes_owed: u32,
    /// Comments left before the next like is owed
    pub comments_until_next_like: u32,
    /// Progress through the current cycle, 0 to 100
    pub progress_percent: f64,
    /// Whether the latest comment opened a new cycle
    pub is_like_due: bool,
}

impl LikeStatus {
    /// Status of a post with no comments.
    pub const fn idle() -> Self {
        Self {
            likes_owed: 0,
            comments_until_next_like: COMMENTS_PER_LIKE,
            progress_percent: 0.0,
            is_like_due: false,
        }
    }

    /// Owed likes not yet covered by the likes actually applied.
    pub fn like_gap(&self, moderator_likes: u32) -> u32 {
        self.likes_owed.saturating_sub(moderator_likes)
    }
}

/// Compute the like status for a comment count.
///
/// Comment #1 already owes a like: it opens the first cycle, so progress
/// restarts at every comment `n` where `n % 3 == 1`.
pub fn compute_like_status(total_comments: u32) -> LikeStatus {
    if total_comments == 0 {
        return LikeStatus::idle();
    }

    let cycle_index = total_comments - 1;
    let remainder = cycle_index % COMMENTS_PER_LIKE;

    LikeStatus {
        likes_owed: cycle_index / COMMENTS_PER_LIKE + 1,
        comments_until_next_like: COMMENTS_PER_LIKE - remainder,
        progress_percent: f64::from(remainder) / f64::from(COMMENTS_PER_LIKE) * 100.0,
        is_like_due: remainder == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_zero_comments() {
        let status = compute_like_status(0);
        assert_eq!(status, LikeStatus::idle());
        assert_eq!(status.likes_owed, 0);
        assert_eq!(status.comments_until_next_like, 3);
        assert_eq!(status.progress_percent, 0.0);
        assert!(!status.is_like_due);
    }

    #[test]
    fn test_first_comment_is_due() {
        let status = compute_like_status(1);
        assert_eq!(status.likes_owed, 1);
        assert_eq!(status.comments_until_next_like, 3);
        assert_eq!(status.progress_percent, 0.0);
        assert!(status.is_like_due);
    }

    #[test]
    fn test_worked_values() {
        let two = compute_like_status(2);
        assert_eq!((two.likes_owed, two.comments_until_next_like), (1, 2));
        assert!(approx(two.progress_percent, 33.33));
        assert!(!two.is_like_due);

        let three = compute_like_status(3);
        assert_eq!((three.likes_owed, three.comments_until_next_like), (1, 1));
        assert!(approx(three.progress_percent, 66.67));

        let four = compute_like_status(4);
        assert_eq!((four.likes_owed, four.comments_until_next_like), (2, 3));
        assert!(four.is_like_due);

        let five = compute_like_status(5);
        assert_eq!((five.likes_owed, five.comments_until_next_like), (2, 2));
        assert!(approx(five.progress_percent, 33.33));
        assert!(!five.is_like_due);

        let six = compute_like_status(6);
        assert_eq!((six.likes_owed, six.comments_until_next_like), (2, 1));

        let seven = compute_like_status(7);
        assert_eq!(seven.likes_owed, 3);
        assert!(seven.is_like_due);
    }

    #[test]
    fn test_rule_holds_over_range() {
        for n in 1..=500u32 {
            let status = compute_like_status(n);
            assert_eq!(status.likes_owed, (n - 1) / 3 + 1, "owed at {}", n);
            assert_eq!(status.comments_until_next_like + (n - 1) % 3, 3, "gap at {}", n);
            assert_eq!(status.is_like_due, n % 3 == 1, "due at {}", n);
            assert!((0.0..100.0).contains(&status.progress_percent));
        }
    }

    #[test]
    fn test_large_count_does_not_overflow() {
        let status = compute_like_status(u32::MAX);
        assert_eq!(status.likes_owed, (u32::MAX - 1) / 3 + 1);
    }

    #[test]
    fn test_like_gap() {
        let status = compute_like_status(17);
        assert_eq!(status.likes_owed, 6);
        assert_eq!(status.like_gap(5), 1);
        assert_eq!(status.like_gap(9), 0);
    }
}
