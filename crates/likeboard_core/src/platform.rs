//! Social platforms a post can belong to.

use likeboard_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The fixed set of platforms, in tab order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// Facebook
    #[default]
    Facebook,
    /// Instagram
    Instagram,
    /// TikTok
    TikTok,
    /// LinkedIn
    LinkedIn,
    /// X (formerly Twitter)
    X,
}

impl Platform {
    /// All platforms in tab order.
    pub fn all() -> Vec<Platform> {
        Platform::iter().collect()
    }

    /// Position of this platform in tab order.
    pub fn index(self) -> usize {
        Platform::iter().position(|p| p == self).unwrap_or(0)
    }

    /// Platform at a tab position, if any.
    pub fn from_index(index: usize) -> Option<Platform> {
        Platform::iter().nth(index)
    }

    /// Next platform, wrapping around.
    pub fn next(self) -> Platform {
        let count = Platform::iter().len();
        Platform::from_index((self.index() + 1) % count).unwrap_or(self)
    }

    /// Previous platform, wrapping around.
    pub fn previous(self) -> Platform {
        let count = Platform::iter().len();
        Platform::from_index((self.index() + count - 1) % count).unwrap_or(self)
    }

    /// Parse a platform name, ignoring case.
    #[track_caller]
    pub fn parse(name: &str) -> Result<Platform, ValidationError> {
        name.trim().parse::<Platform>().map_err(|_| {
            ValidationError::new(ValidationErrorKind::UnknownPlatform(name.to_string()))
        })
    }
}
