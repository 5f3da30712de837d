//! Configuration loading and merging.
//!
//! The base file must exist; the override file is optional. Mappings merge
//! recursively with the override winning per key; scalars and sequences
//! replace wholesale. The merged document then deserializes into
//! [`ProjectConfig`], whose serde defaults absorb any absent section.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use appize_core::domain::ProjectConfig;

use crate::error::{CliError, CliResult};

/// Load the base config, merge the optional override, deserialize.
pub fn load_config(base: &Path, override_path: Option<&Path>) -> CliResult<ProjectConfig> {
    let mut merged = load_yaml(base)?;

    if let Some(path) = override_path {
        let overlay = load_yaml(path)?;
        debug!(path = %path.display(), "merging override configuration");
        merged = merge_values(merged, overlay);
    }

    serde_yaml::from_value(merged).map_err(|e| config_error(base, "invalid configuration", e))
}

fn load_yaml(path: &Path) -> CliResult<Value> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| config_error(path, "cannot read file", e))?;
    serde_yaml::from_str(&raw).map_err(|e| config_error(path, "invalid YAML", e))
}

fn config_error(
    path: &Path,
    message: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> CliError {
    CliError::ConfigError {
        path: PathBuf::from(path),
        message: message.into(),
        source: Some(Box::new(source)),
    }
}

/// Recursive merge: mappings merge per key, everything else is replaced
/// by the override value.
fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => merge_values(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Mapping(base_map)
        }
        (_, overlay) => overlay,
    }
}
