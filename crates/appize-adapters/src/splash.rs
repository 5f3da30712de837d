//! Splash screen asset resolution.
//!
//! Remote splash images are downloaded into a `NamedTempFile` first, so
//! the temporary bytes disappear on every exit path, including unwinds.
//! Only the final copy into `res/drawable` is visible to the project.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{error, info};

use appize_core::{
    application::{ApplicationError, ports::{Fetcher, SplashResolver}},
    domain::{SplashConfig, StepOutcome},
    error::AppizeResult,
};

/// Fallback name for downloads whose URL carries no usable filename.
const DOWNLOAD_FALLBACK: &str = "downloaded_splash.png";

/// Resolves splash images into the Android drawable directory.
pub struct FileSplashResolver {
    fetcher: Box<dyn Fetcher>,
}

impl FileSplashResolver {
    pub fn new(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    fn resolve_inner(
        &self,
        splash: &SplashConfig,
        res_root: &Path,
        assets_root: &Path,
    ) -> AppizeResult<String> {
        let drawable = res_root.join("drawable");
        std::fs::create_dir_all(&drawable)
            .map_err(|e| fs_error(&drawable, "create directory", e))?;

        let content = splash.content.trim();
        if content.starts_with("http://") || content.starts_with("https://") {
            let bytes = self.fetcher.fetch(content)?;

            let mut staging = NamedTempFile::new()
                .map_err(|e| fs_error(Path::new("<tempfile>"), "create temp file", e))?;
            staging
                .write_all(&bytes)
                .map_err(|e| fs_error(staging.path(), "write temp file", e))?;

            let name = remote_filename(content);
            let target = drawable.join(&name);
            std::fs::copy(staging.path(), &target)
                .map_err(|e| fs_error(&target, "copy splash", e))?;
            Ok(name)
        } else {
            let source = assets_root.join(content);
            if !source.exists() {
                return Err(ApplicationError::Filesystem {
                    path: source,
                    reason: "Splash image not found".into(),
                }
                .into());
            }
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DOWNLOAD_FALLBACK.to_string());
            let target = drawable.join(&name);
            std::fs::copy(&source, &target).map_err(|e| fs_error(&target, "copy splash", e))?;
            Ok(name)
        }
    }
}

impl SplashResolver for FileSplashResolver {
    fn resolve(&self, splash: &SplashConfig, res_root: &Path, assets_root: &Path) -> StepOutcome {
        if splash.kind != "image" || splash.content.trim().is_empty() {
            info!(kind = %splash.kind, "splash is not an image asset, nothing to copy");
            return StepOutcome::skipped("splash is not an image asset");
        }

        match self.resolve_inner(splash, res_root, assets_root) {
            Ok(name) => {
                info!(file = %name, "splash image installed");
                StepOutcome::Applied
            }
            Err(e) => {
                error!(error = %e, "splash resolution failed");
                StepOutcome::failed(e.to_string())
            }
        }
    }
}

fn fs_error(path: &Path, operation: &str, e: std::io::Error) -> appize_core::error::AppizeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

/// Derive a filename from the trailing URL segment. Query strings are
/// stripped; segments without a short alphanumeric extension fall back
/// to a fixed name.
fn remote_filename(url: &str) -> String {
    let trailing = url
        .split('?')
        .next()
        .unwrap_or(url)
        .rsplit('/')
        .next()
        .unwrap_or("");

    let has_extension = trailing
        .rsplit_once('.')
        .map(|(stem, ext)| {
            !stem.is_empty()
                && (1..=5).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or(false);

    if has_extension {
        trailing.to_string()
    } else {
        DOWNLOAD_FALLBACK.to_string()
    }
}
