//! Role gating error types.

/// An action was requested that the active role is not offered.
///
/// Role gating is advisory; this error is produced by presentation layers,
/// never by the store.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Permission Error: {} may not {} at line {} in {}",
    role,
    action,
    line,
    file
)]
pub struct PermissionError {
    /// Role that requested the action
    pub role: String,
    /// Action that was refused
    pub action: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PermissionError {
    /// Create a new PermissionError at the current location.
    #[track_caller]
    pub fn new(role: impl Into<String>, action: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            role: role.into(),
            action: action.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
