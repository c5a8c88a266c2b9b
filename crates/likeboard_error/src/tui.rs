//! Terminal UI error types.

/// Terminal setup or rendering failure with source location.
#[derive(Debug, Clone)]
pub struct TuiError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TUI Error: {} at line {} in {}", self.message, self.line, self.file)
    }
}

impl std::error::Error for TuiError {}

impl From<std::io::Error> for TuiError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        TuiError::new(err.to_string())
    }
}
