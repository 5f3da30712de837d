//! Desktop (Tauri shell) platform modifier.
//!
//! Token substitution over the shell's descriptor and manifest, then a
//! read-modify-write pass over the same `tauri.conf.json` it configures:
//! product metadata, validated bundle targets, icon references, and the
//! first declared window's properties. `file:///` URLs mean the web content
//! ships with the app: it is staged into the shell's `dist/` directory and
//! the window URL becomes dist-relative. A descriptor that fails to parse
//! is a structural error - the platform pass fails rather than claiming
//! partial success. A merely absent one is an isolated step like any other.

use std::path::Path;

use serde_json::{Value, json};
use tracing::{error, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::application::report::PlatformReport;
use crate::application::services::substitution;
use crate::domain::{ProjectConfig, ReplacementMap, StepOutcome};
use crate::error::AppizeResult;

/// Bundle formats the desktop shell can produce.
pub const BUNDLE_FORMATS: &[&str] = &["msi", "exe", "portable"];

const DEFAULT_BUNDLE_FORMAT: &str = "msi";

/// Desktop platform modifier.
pub struct DesktopModifier {
    fs: Box<dyn Filesystem>,
}

impl DesktopModifier {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Apply the configuration to a desktop shell project in place.
    #[instrument(skip_all, fields(app = %config.app_name))]
    pub fn apply(
        &self,
        config: &ProjectConfig,
        project_root: &Path,
        assets_root: &Path,
    ) -> AppizeResult<PlatformReport> {
        info!("Starting desktop modification pass");
        let mut report = PlatformReport::new("desktop");

        let shell_dir = project_root.join("src-tauri");
        let descriptor_path = shell_dir.join("tauri.conf.json");
        let manifest_path = shell_dir.join("Cargo.toml");

        // Local web content is staged before the descriptor passes so the
        // window URL they write is the dist-relative one.
        let (url, staging) = self.resolve_url(config, project_root, assets_root);
        if let Some(outcome) = staging {
            report.push("web content", outcome);
        }

        // Token pass over the descriptor and the shell manifest.
        let descriptor_map = descriptor_replacements(config, &url);
        match substitution::replace_tokens(self.fs.as_ref(), &descriptor_path, &descriptor_map) {
            Ok(outcome) => report.push("descriptor tokens", outcome),
            Err(e) => {
                error!(error = %e, "Descriptor token substitution failed");
                report.push("descriptor tokens", StepOutcome::failed(e.to_string()));
            }
        }

        let mut manifest_map = ReplacementMap::new();
        manifest_map
            .set("PACKAGE_NAME", config.app_name.trim().replace(' ', "_"))
            .set(
                "AUTHOR",
                config.author.clone().unwrap_or_else(|| "unknown".into()),
            );
        match substitution::replace_tokens(self.fs.as_ref(), &manifest_path, &manifest_map) {
            Ok(outcome) => report.push("shell manifest", outcome),
            Err(e) => {
                error!(error = %e, "Shell manifest substitution failed");
                report.push("shell manifest", StepOutcome::failed(e.to_string()));
            }
        }

        // Resolve the bundle icon before rewriting the descriptor so the
        // icon list can point at the copied file.
        let (icon_list, icon_outcome) = self.resolve_icon(config, &shell_dir, assets_root);
        report.push("bundle icon", icon_outcome);

        // Only a descriptor that fails to parse is structural; a missing or
        // unreadable one is an isolated step outcome.
        let rewrite = self.rewrite_descriptor(config, &descriptor_path, icon_list, &url)?;
        report.push("descriptor rewrite", rewrite);

        info!(failed = report.failed_count(), "Desktop modification pass complete");
        Ok(report)
    }

    /// Decide the URL the shell window will load.
    ///
    /// Remote URLs pass through untouched. A `file:///` URL means the web
    /// content ships with the app: `dist/` is cleared and repopulated from
    /// the assets root and the returned URL is relative to it.
    fn resolve_url(
        &self,
        config: &ProjectConfig,
        project_root: &Path,
        assets_root: &Path,
    ) -> (String, Option<StepOutcome>) {
        let Some(relative) = config.url.strip_prefix("file:///") else {
            return (config.url.clone(), None);
        };

        let dist_dir = project_root.join("dist");
        match self.restage_dist(&dist_dir, assets_root) {
            Ok(true) => {
                let url = if relative.is_empty() {
                    "index.html".to_string()
                } else {
                    relative.to_string()
                };
                info!(url, "Staged local web content into dist/");
                (url, Some(StepOutcome::Applied))
            }
            Ok(false) => {
                warn!(
                    assets = %assets_root.display(),
                    "No local web assets to stage; the shell will load nothing"
                );
                (String::new(), Some(StepOutcome::skipped("no local web assets")))
            }
            Err(e) => {
                error!(error = %e, "Web content staging failed");
                (String::new(), Some(StepOutcome::failed(e.to_string())))
            }
        }
    }

    /// Clear `dist_dir` and copy the assets tree into it. Returns `false`
    /// when there is nothing to copy.
    fn restage_dist(&self, dist_dir: &Path, assets_root: &Path) -> AppizeResult<bool> {
        if self.fs.exists(dist_dir) {
            self.fs.remove_dir_all(dist_dir)?;
        }
        self.fs.create_dir_all(dist_dir)?;

        if !self.fs.exists(assets_root) || self.fs.dir_is_empty(assets_root)? {
            return Ok(false);
        }
        self.fs.copy_tree(assets_root, dist_dir)?;
        Ok(true)
    }

    /// Copy the configured icon into the shell's icons directory, falling
    /// back to the template placeholder when absent or unreadable.
    fn resolve_icon(
        &self,
        config: &ProjectConfig,
        shell_dir: &Path,
        assets_root: &Path,
    ) -> (Vec<String>, StepOutcome) {
        let placeholder = vec!["icons/placeholder.png".to_string()];

        let Some(icon) = config.icon.as_deref().filter(|s| !s.trim().is_empty()) else {
            return (placeholder, StepOutcome::skipped("no icon configured"));
        };

        let source = assets_root.join(icon);
        if !self.fs.exists(&source) {
            warn!(path = %source.display(), "Icon file not found, using template placeholder");
            return (placeholder, StepOutcome::skipped("icon file not found"));
        }

        let icons_dir = shell_dir.join("icons");
        let dest = icons_dir.join("icon.png");
        let copy = self
            .fs
            .create_dir_all(&icons_dir)
            .and_then(|()| self.fs.copy_file(&source, &dest));
        match copy {
            Ok(()) => {
                info!(from = %source.display(), "Copied bundle icon");
                (vec!["icons/icon.png".to_string()], StepOutcome::Applied)
            }
            Err(e) => {
                error!(error = %e, "Icon copy failed, using template placeholder");
                (placeholder, StepOutcome::failed(e.to_string()))
            }
        }
    }

    /// Read-modify-write the descriptor JSON.
    ///
    /// A missing or unreadable descriptor is reported as a step outcome;
    /// only a parse failure propagates and fails the platform pass.
    fn rewrite_descriptor(
        &self,
        config: &ProjectConfig,
        path: &Path,
        icon_list: Vec<String>,
        url: &str,
    ) -> AppizeResult<StepOutcome> {
        if !self.fs.exists(path) {
            warn!(path = %path.display(), "Descriptor not found, skipping rewrite");
            return Ok(StepOutcome::skipped("descriptor not found"));
        }
        let raw = match self.fs.read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Descriptor read failed");
                return Ok(StepOutcome::failed(e.to_string()));
            }
        };
        let mut descriptor: Value =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::DescriptorParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let webapp = &config.webapp;
        let identifier = config
            .build
            .app_id
            .clone()
            .unwrap_or_else(|| config.package_name.clone());

        descriptor["productName"] = json!(config.app_name);
        descriptor["version"] = json!(config.build.version);
        descriptor["identifier"] = json!(identifier);
        descriptor["bundle"]["targets"] = json!([validated_format(&config.build.output_format)]);
        descriptor["bundle"]["icon"] = json!(icon_list);

        if let Some(window) = descriptor["app"]["windows"]
            .as_array_mut()
            .and_then(|w| w.first_mut())
        {
            window["title"] = json!(config.app_name);
            window["width"] = json!(webapp.width);
            window["height"] = json!(webapp.height);
            window["resizable"] = json!(webapp.resizable);
            // decorations off means a frameless window
            window["decorations"] = json!(!webapp.frameless);
            window["transparent"] = json!(webapp.transparent);
            window["url"] = json!(url);
        } else {
            warn!("Descriptor declares no windows; window properties not applied");
        }

        let mut out = serde_json::to_string_pretty(&descriptor).map_err(|e| {
            ApplicationError::DescriptorParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        out.push('\n');
        match self.fs.write_file(path, &out) {
            Ok(()) => Ok(StepOutcome::Applied),
            Err(e) => {
                error!(error = %e, "Descriptor write failed");
                Ok(StepOutcome::failed(e.to_string()))
            }
        }
    }
}

/// Validate the configured bundle format, defaulting with a warning.
fn validated_format(format: &str) -> &str {
    if BUNDLE_FORMATS.contains(&format) {
        format
    } else {
        warn!(format, "Unknown output_format, defaulting to '{DEFAULT_BUNDLE_FORMAT}'");
        DEFAULT_BUNDLE_FORMAT
    }
}

/// Token replacements for the descriptor file.
fn descriptor_replacements(config: &ProjectConfig, url: &str) -> ReplacementMap {
    let webapp = &config.webapp;
    let mut map = ReplacementMap::new();
    map.set("APP_NAME", config.app_name.clone())
        .set("APP_VERSION", config.build.version.clone())
        .set(
            "BUNDLE_IDENTIFIER",
            config
                .build
                .app_id
                .clone()
                .unwrap_or_else(|| config.package_name.clone()),
        )
        .set("APP_TITLE", config.app_name.clone())
        .set_num("WEBAPP_WIDTH", webapp.width)
        .set_num("WEBAPP_HEIGHT", webapp.height)
        .set_bool("WEBAPP_RESIZABLE", webapp.resizable)
        .set_bool("WEBAPP_DECORATIONS", !webapp.frameless)
        .set("WEBAPP_URL", url.to_string());
    map
}
