//! Application layer errors.
//!
//! These errors represent failures in the engines and orchestration, not in
//! domain validation. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while mutating the template project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (read, write, move, create, remove).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Remote fetch failed (network error, non-success status, timeout).
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Image bytes could not be decoded to a raster.
    #[error("Image decode failed: {reason}")]
    ImageDecode { reason: String },

    /// Namespace relocation left work undone.
    ///
    /// Relocation failures are fatal to the whole operation, unlike most of
    /// this system: a half-relocated namespace is an inconsistent source
    /// tree worth surfacing loudly, while a missing icon is merely cosmetic.
    #[error("Namespace relocation failed: {reason}")]
    Relocation { reason: String },

    /// The desktop descriptor file could not be parsed. Structural: the
    /// whole platform pass fails rather than claiming partial success.
    #[error("Descriptor parse error in {path}: {reason}")]
    DescriptorParse { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the template project tree is intact".into(),
            ],
            Self::Fetch { url, .. } => vec![
                format!("Could not download: {}", url),
                "Check the URL and your network connection".into(),
            ],
            Self::ImageDecode { .. } => vec![
                "The image could not be decoded".into(),
                "Supply a PNG, JPEG or WebP image".into(),
            ],
            Self::Relocation { reason } => vec![
                format!("Relocation stopped: {}", reason),
                "The source tree may be half-moved; restore the template and retry".into(),
            ],
            Self::DescriptorParse { path, .. } => vec![
                format!("Invalid JSON in: {}", path.display()),
                "Restore the template descriptor file".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::Relocation { .. } => ErrorCategory::Internal,
            Self::Fetch { .. } => ErrorCategory::NotFound,
            Self::ImageDecode { .. } => ErrorCategory::Validation,
            Self::DescriptorParse { .. } => ErrorCategory::Configuration,
        }
    }
}
