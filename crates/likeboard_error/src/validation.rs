//! Input validation error types.

/// Validation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Post description is empty
    EmptyDescription,
    /// Date could not be parsed as YYYY-MM-DD
    InvalidDate(String),
    /// Counter input is not a usable number
    InvalidCount(String),
    /// Attempt to change a field fixed at creation
    ImmutableField(String),
    /// Unrecognized platform name
    UnknownPlatform(String),
    /// Destructive command issued without its confirmation flag
    ConfirmationRequired(String),
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationErrorKind::EmptyDescription => write!(f, "Description must not be empty"),
            ValidationErrorKind::InvalidDate(input) => {
                write!(f, "Invalid date '{}', expected YYYY-MM-DD", input)
            }
            ValidationErrorKind::InvalidCount(input) => {
                write!(f, "Invalid count '{}', expected a whole number", input)
            }
            ValidationErrorKind::ImmutableField(field) => {
                write!(f, "Field '{}' cannot be changed after creation", field)
            }
            ValidationErrorKind::UnknownPlatform(name) => write!(f, "Unknown platform '{}'", name),
            ValidationErrorKind::ConfirmationRequired(hint) => {
                write!(f, "Confirmation required: {}", hint)
            }
        }
    }
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use likeboard_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::InvalidCount("abc".into()));
/// assert!(format!("{}", err).contains("abc"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
