//! Image references attached to posts.

use base64::Engine;
use likeboard_error::{ImageError, ImageErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Largest image file accepted for inline storage.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Where a post image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Already-hosted image or data URL
    Url(String),
    /// Local file to inline as a data URL
    File(PathBuf),
}

impl ImageSource {
    /// Interpret user input as a URL when it looks like one, otherwise a path.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.contains("://") || trimmed.starts_with("data:") {
            ImageSource::Url(trimmed.to_string())
        } else {
            ImageSource::File(PathBuf::from(trimmed))
        }
    }

    /// Convert into a reference suitable for `Post::image_url`.
    #[instrument(skip(self))]
    pub fn into_reference(self) -> Result<String, ImageError> {
        match self {
            ImageSource::Url(url) => {
                if url.starts_with("http://")
                    || url.starts_with("https://")
                    || url.starts_with("data:")
                {
                    Ok(url)
                } else {
                    Err(ImageError::new(ImageErrorKind::InvalidUrl(url)))
                }
            }
            ImageSource::File(path) => inline_file(&path),
        }
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

fn inline_file(path: &Path) -> Result<String, ImageError> {
    let mime = mime_for(path).ok_or_else(|| {
        ImageError::new(ImageErrorKind::UnsupportedType(path.display().to_string()))
    })?;

    let size = std::fs::metadata(path)
        .map_err(|e| ImageError::new(ImageErrorKind::Io(e.to_string())))?
        .len();
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::new(ImageErrorKind::TooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        }));
    }

    let bytes =
        std::fs::read(path).map_err(|e| ImageError::new(ImageErrorKind::Io(e.to_string())))?;
    debug!(size, mime, "Inlining image file");

    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, payload))
}
