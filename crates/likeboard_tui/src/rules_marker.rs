//! First-launch detection for the rules screen.

use likeboard_error::TuiError;
use std::path::{Path, PathBuf};
use tracing::debug;

const MARKER_FILE: &str = "rules_seen";

/// Marker file recording that the rules screen has been shown once.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RulesMarker {
    path: PathBuf,
}

impl RulesMarker {
    /// Marker at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Marker inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(MARKER_FILE))
    }

    /// Marker in the user config directory, if the platform has one.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::in_dir(&dir.join("likeboard")))
    }

    /// Whether the rules have never been shown.
    pub fn is_first_launch(&self) -> bool {
        !self.path.exists()
    }

    /// Remember that the rules were shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker file cannot be written.
    pub fn record(&self) -> Result<(), TuiError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, b"")?;
        debug!(path = %self.path.display(), "Recorded rules marker");
        Ok(())
    }
}
