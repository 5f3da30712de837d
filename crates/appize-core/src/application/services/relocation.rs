//! Namespace Relocation Engine.
//!
//! Moves the fixed set of namespaced activity sources from the template
//! package directory to the configured one, rewrites each file's `package`
//! declaration, and prunes now-empty directories upward toward (but never
//! including) the `java` root.
//!
//! Failure policy is deliberately asymmetric with the rest of the pipeline:
//! directory-creation and move/rewrite failures propagate instead of being
//! soft-failed, because a half-relocated namespace is an inconsistent source
//! tree, which is genuinely worse than a missing icon or splash asset.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::application::services::substitution::replace_literals;
use crate::domain::{PackageId, StepOutcome};
use crate::error::AppizeResult;

/// The fixed set of namespaced source files the template ships.
///
/// A static constant by contract with the template project, not
/// configuration: the surrounding scaffolding guarantees this layout.
pub const NAMESPACED_SOURCES: &[&str] = &["MainActivity.java", "SplashActivity.java"];

/// Relocate the namespaced sources under `source_root/java` from `old_pkg`
/// to `new_pkg`.
///
/// If the old package directory does not exist this is a valid terminal
/// state, not a failure: the new directory is still created (downstream
/// steps need a valid target) and `Skipped` is reported.
#[instrument(skip(fs), fields(old = %old_pkg, new = %new_pkg))]
pub fn relocate_sources(
    fs: &dyn Filesystem,
    source_root: &Path,
    old_pkg: &PackageId,
    new_pkg: &PackageId,
) -> AppizeResult<StepOutcome> {
    let java_root = source_root.join("java");
    let old_dir = java_root.join(old_pkg.dir_path());
    let new_dir = java_root.join(new_pkg.dir_path());

    if !fs.exists(&old_dir) {
        warn!(dir = %old_dir.display(), "Old namespace directory not found, nothing to move");
        fs.create_dir_all(&new_dir).map_err(fatal)?;
        return Ok(StepOutcome::skipped("old namespace directory not found"));
    }

    fs.create_dir_all(&new_dir).map_err(fatal)?;

    let declaration_rewrite = [(old_pkg.declaration(), new_pkg.declaration())];
    let mut moved = 0usize;

    for name in NAMESPACED_SOURCES {
        let src = old_dir.join(name);
        let dst = new_dir.join(name);

        if !fs.exists(&src) {
            warn!(file = name, "Namespaced source not present, skipping");
            continue;
        }

        fs.rename(&src, &dst)
            .and_then(|()| replace_literals(fs, &dst, &declaration_rewrite).map(|_| ()))
            .map_err(fatal)?;
        info!(file = name, "Moved and re-declared");
        moved += 1;
    }

    if moved == 0 {
        return Ok(StepOutcome::skipped("no namespaced sources present"));
    }

    prune_empty_dirs(fs, &old_dir, &java_root);
    Ok(StepOutcome::Applied)
}

/// Wrap a fatal relocation failure. Directory creation and move/rewrite
/// errors surface as [`ApplicationError::Relocation`] so callers see that
/// the source tree may be half-moved.
fn fatal(e: crate::error::AppizeError) -> ApplicationError {
    ApplicationError::Relocation {
        reason: e.to_string(),
    }
}

/// Remove empty directories walking upward from `start` toward `stop`.
///
/// Stops at the first non-empty directory, at `stop` itself, or on any I/O
/// error. Pruning is best-effort cleanup; errors here never propagate.
fn prune_empty_dirs(fs: &dyn Filesystem, start: &Path, stop: &Path) {
    let mut current: PathBuf = start.to_path_buf();

    while current.starts_with(stop) && current != stop {
        if !fs.exists(&current) {
            break;
        }
        match fs.dir_is_empty(&current) {
            Ok(true) => {
                if let Err(e) = fs.remove_dir(&current) {
                    warn!(dir = %current.display(), error = %e, "Stopping cleanup");
                    break;
                }
                debug!(dir = %current.display(), "Removed empty directory");
            }
            Ok(false) => break,
            Err(e) => {
                warn!(dir = %current.display(), error = %e, "Stopping cleanup");
                break;
            }
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
}
