//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `appize-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ImageRef, SplashConfig, StepOutcome};
use crate::error::AppizeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `appize_adapters::filesystem::LocalFilesystem` (production)
/// - `appize_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// The surface is exactly what the rewrite engines need: whole-file text
/// read/write, existence checks, moves, copies, the directory primitives
/// relocation pruning depends on, and the tree operations web-content
/// staging depends on. No streaming, no metadata.
pub trait Filesystem: Send + Sync {
    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> AppizeResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> AppizeResult<()>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AppizeResult<()>;

    /// Move a file from one path to another.
    fn rename(&self, from: &Path, to: &Path) -> AppizeResult<()>;

    /// Copy a file to a new path.
    fn copy_file(&self, from: &Path, to: &Path) -> AppizeResult<()>;

    /// Check whether a directory has no entries.
    fn dir_is_empty(&self, path: &Path) -> AppizeResult<bool>;

    /// Remove a single empty directory.
    fn remove_dir(&self, path: &Path) -> AppizeResult<()>;

    /// Remove a directory tree and everything under it.
    fn remove_dir_all(&self, path: &Path) -> AppizeResult<()>;

    /// Recursively copy the contents of `from` into `to`, creating `to` if
    /// needed. Files already present in `to` are overwritten on name clash.
    fn copy_tree(&self, from: &Path, to: &Path) -> AppizeResult<()>;
}

/// Port for retrieving remote bytes.
///
/// Implemented by:
/// - `appize_adapters::fetch::HttpFetcher` (production, bounded timeout)
/// - `appize_adapters::fetch::StaticFetcher` (testing)
pub trait Fetcher: Send + Sync {
    /// Fetch the body at `url`, failing on any non-success response.
    fn fetch(&self, url: &str) -> AppizeResult<Vec<u8>>;
}

/// Port for launcher icon derivation.
///
/// Implemented by `appize_adapters::icon::RasterEngine`.
///
/// The contract is a reported outcome, never a panic or error escaping the
/// boundary: an unusable source falls back to synthetic generation, and only
/// an output-write failure yields `Failed`.
pub trait IconEngine: Send + Sync {
    /// Derive the full density matrix plus adaptive layers under `res_root`.
    fn derive(&self, source: &ImageRef, res_root: &Path, background_color: &str) -> StepOutcome;
}

/// Port for splash asset resolution.
///
/// Implemented by `appize_adapters::splash::FileSplashResolver`.
pub trait SplashResolver: Send + Sync {
    /// Resolve the configured splash image into the drawable directory under
    /// `res_root`, reading local sources relative to `assets_root`.
    fn resolve(&self, splash: &SplashConfig, res_root: &Path, assets_root: &Path) -> StepOutcome;
}
