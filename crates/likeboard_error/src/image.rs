//! Image reference error types.

/// Kinds of image errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// File could not be read
    #[display("I/O error: {}", _0)]
    Io(String),
    /// File extension is not a known image type
    #[display("Unsupported image type: {}", _0)]
    UnsupportedType(String),
    /// File exceeds the upload limit
    #[display("Image is {} bytes, limit is {} bytes", size, limit)]
    TooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },
    /// Reference is neither an http(s) nor a data URL
    #[display("Invalid image URL: {}", _0)]
    InvalidUrl(String),
}

/// Image error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
