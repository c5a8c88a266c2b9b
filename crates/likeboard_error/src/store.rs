//! Persistence error types.

/// Kinds of persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// No post with the given id
    #[display("Post not found: {}", _0)]
    NotFound(String),
    /// I/O error while reading or writing the backing file
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Stored records could not be encoded or decoded
    #[display("Serialization error: {}", _0)]
    Serialization(String),
    /// The backing store is unreachable
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
}

/// Persistence error with location tracking.
///
/// # Examples
///
/// ```
/// use likeboard_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound("fb1".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a missing post.
    #[track_caller]
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::new(StoreErrorKind::NotFound(id.to_string()))
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        StoreError::new(StoreErrorKind::Io(err.to_string()))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        StoreError::new(StoreErrorKind::Serialization(err.to_string()))
    }
}
