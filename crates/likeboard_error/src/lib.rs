//! Error types for the Likeboard workspace.
//!
//! Every error records the file and line where it was created. The
//! crate-level [`LikeboardError`] wraps one of the per-concern errors below.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod image;
mod permission;
mod store;
mod tui;
mod validation;

pub use config::ConfigError;
pub use image::{ImageError, ImageErrorKind};
pub use permission::PermissionError;
pub use store::{StoreError, StoreErrorKind};
pub use tui::TuiError;
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum LikeboardErrorKind {
    /// Rejected user input
    Validation(ValidationError),
    /// Persistence failure
    Store(StoreError),
    /// Image reference could not be produced
    Image(ImageError),
    /// Action not offered to the current role
    Permission(PermissionError),
    /// Configuration error
    Config(ConfigError),
    /// Terminal UI failure
    Tui(TuiError),
}

impl std::fmt::Display for LikeboardErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikeboardErrorKind::Validation(e) => write!(f, "{}", e),
            LikeboardErrorKind::Store(e) => write!(f, "{}", e),
            LikeboardErrorKind::Image(e) => write!(f, "{}", e),
            LikeboardErrorKind::Permission(e) => write!(f, "{}", e),
            LikeboardErrorKind::Config(e) => write!(f, "{}", e),
            LikeboardErrorKind::Tui(e) => write!(f, "{}", e),
        }
    }
}

/// Likeboard error with kind discrimination.
#[derive(Debug)]
pub struct LikeboardError(Box<LikeboardErrorKind>);

impl LikeboardError {
    /// Create a new error from a kind.
    pub fn new(kind: LikeboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LikeboardErrorKind {
        &self.0
    }

    /// Whether this error came from the persistence layer.
    pub fn is_store(&self) -> bool {
        matches!(*self.0, LikeboardErrorKind::Store(_))
    }

    /// Whether this error is rejected user input.
    pub fn is_validation(&self) -> bool {
        matches!(*self.0, LikeboardErrorKind::Validation(_))
    }

    /// Short description without the source location, for status lines.
    pub fn user_message(&self) -> String {
        match &*self.0 {
            LikeboardErrorKind::Validation(e) => e.kind.to_string(),
            LikeboardErrorKind::Store(e) => e.kind.to_string(),
            LikeboardErrorKind::Image(e) => e.kind.to_string(),
            LikeboardErrorKind::Permission(e) => format!("{} may not {}", e.role, e.action),
            LikeboardErrorKind::Config(e) => e.message.clone(),
            LikeboardErrorKind::Tui(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for LikeboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Likeboard Error: {}", self.0)
    }
}

impl std::error::Error for LikeboardError {}

impl<T> From<T> for LikeboardError
where
    T: Into<LikeboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Likeboard operations.
pub type LikeboardResult<T> = std::result::Result<T, LikeboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_conversion() {
        let err: LikeboardError = StoreError::new(StoreErrorKind::NotFound("p1".into())).into();
        assert!(err.is_store());
        assert!(matches!(err.kind(), LikeboardErrorKind::Store(_)));
        assert!(err.to_string().starts_with("Likeboard Error: Store Error"));
    }

    #[test]
    fn test_user_message_omits_location() {
        let err: LikeboardError = PermissionError::new("Moderator", "delete_post").into();
        assert_eq!(err.user_message(), "Moderator may not delete_post");
        assert!(!err.is_store());
    }

    #[test]
    fn test_location_is_recorded() {
        let err = ConfigError::new("bad");
        assert!(err.file.ends_with("lib.rs"));
        assert!(err.line > 0);
    }
}
