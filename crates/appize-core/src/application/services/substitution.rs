//! Placeholder Substitution Engine.
//!
//! Two rewrite operations over a single file: literal substring replacement
//! and `{{KEY}}` token replacement. Both are idempotent and write back only
//! when the content actually changed; a missing file is a warning and a
//! `Skipped` outcome, not an error, while read/write failures propagate.

use std::path::Path;

use tracing::{debug, warn};

use crate::application::ports::Filesystem;
use crate::domain::{ReplacementMap, StepOutcome};
use crate::error::AppizeResult;

/// Apply `(old, new)` literal replacements to a file, in caller order.
///
/// Order matters for overlapping literals: each pair is applied to the
/// result of the previous one.
pub fn replace_literals(
    fs: &dyn Filesystem,
    path: &Path,
    pairs: &[(String, String)],
) -> AppizeResult<StepOutcome> {
    rewrite(fs, path, |content| {
        let mut out = content.to_string();
        for (old, new) in pairs {
            out = out.replace(old, new);
        }
        out
    })
}

/// Replace every `{{KEY}}` token with its value from the map.
pub fn replace_tokens(
    fs: &dyn Filesystem,
    path: &Path,
    map: &ReplacementMap,
) -> AppizeResult<StepOutcome> {
    rewrite(fs, path, |content| {
        let mut out = content.to_string();
        for (key, value) in map.iter() {
            out = out.replace(&ReplacementMap::token(key), value);
        }
        out
    })
}

/// Shared read-transform-write-if-changed skeleton.
fn rewrite(
    fs: &dyn Filesystem,
    path: &Path,
    transform: impl FnOnce(&str) -> String,
) -> AppizeResult<StepOutcome> {
    if !fs.exists(path) {
        warn!(path = %path.display(), "File not found, skipping substitution");
        return Ok(StepOutcome::skipped("file not found"));
    }

    let content = fs.read_to_string(path)?;
    let updated = transform(&content);

    if updated == content {
        debug!(path = %path.display(), "No changes needed");
        return Ok(StepOutcome::Unchanged);
    }

    fs.write_file(path, &updated)?;
    debug!(path = %path.display(), "File updated");
    Ok(StepOutcome::Applied)
}
