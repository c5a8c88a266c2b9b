//! Non-fatal messages surfaced to the user.

use chrono::{DateTime, Utc};

/// Warning recorded when a store operation fails.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Notice {
    message: String,
    at: DateTime<Utc>,
}

impl Notice {
    /// Warning stamped with the current time.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Warning: {}", self.message)
    }
}
