//! The merged, in-memory project configuration consumed by the modifiers.
//!
//! Every field has a serde-level default: absence of a value, or of a whole
//! section, is never fatal. The CLI layer owns acquisition (YAML files,
//! overrides); the core only ever sees this already-merged tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Display name of the app.
    pub app_name: String,
    /// Dotted package identifier (Android namespace / bundle id fallback).
    pub package_name: String,
    /// The URL the generated app loads.
    pub url: String,
    pub build: BuildConfig,
    pub webapp: WebappConfig,
    /// Splash screen settings; `None` skips splash handling entirely.
    pub splash: Option<SplashConfig>,
    /// Release signing material; release config is only generated when all
    /// four fields are present.
    pub signing: Option<SigningConfig>,
    /// Launcher icon source (local path or URL), mobile platforms.
    pub logo: Option<String>,
    /// Icon source for the desktop shell.
    pub icon: Option<String>,
    /// Author, desktop only.
    pub author: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_name: "Default App".into(),
            package_name: "com.default.app".into(),
            url: "https://example.com".into(),
            build: BuildConfig::default(),
            webapp: WebappConfig::default(),
            splash: None,
            signing: None,
            logo: None,
            icon: None,
            author: None,
        }
    }
}

impl ProjectConfig {
    /// Resolve the mobile launcher image reference.
    pub fn logo_ref(&self) -> ImageRef {
        ImageRef::from_option(self.logo.as_deref())
    }

    /// Resolve the desktop icon image reference.
    pub fn icon_ref(&self) -> ImageRef {
        ImageRef::from_option(self.icon.as_deref())
    }
}

/// Build parameters (SDK levels, versions, free-form Gradle options).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub min_sdk_version: u32,
    pub compile_sdk_version: u32,
    pub target_sdk_version: u32,
    pub build_tools_version: String,
    pub version_code: u32,
    pub version_name: String,
    /// Desktop shell version (semver string).
    pub version: String,
    /// Desktop bundle identifier; falls back to `package_name` when absent.
    pub app_id: Option<String>,
    /// Desktop bundle format: msi, exe or portable.
    pub output_format: String,
    /// Free-form key/value pairs injected into the Gradle build script.
    pub gradle_custom_configs: BTreeMap<String, serde_json::Value>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_sdk_version: 21,
            compile_sdk_version: 34,
            target_sdk_version: 34,
            build_tools_version: "34.0.0".into(),
            version_code: 1,
            version_name: "1.0.0".into(),
            version: "0.1.0".into(),
            app_id: None,
            output_format: "msi".into(),
            gradle_custom_configs: BTreeMap::new(),
        }
    }
}

/// Runtime webview flags shared by both platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebappConfig {
    pub enable_javascript: bool,
    pub allow_file_access: bool,
    pub fullscreen: bool,
    pub theme_color: String,
    pub orientation: String,
    pub user_agent: String,
    pub built_in_zoom_controls: bool,
    pub support_zoom: bool,
    // Desktop window geometry
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub frameless: bool,
    pub transparent: bool,
}

impl Default for WebappConfig {
    fn default() -> Self {
        Self {
            enable_javascript: true,
            allow_file_access: false,
            fullscreen: true,
            theme_color: "#ffffff".into(),
            orientation: "portrait".into(),
            user_agent: String::new(),
            built_in_zoom_controls: false,
            support_zoom: false,
            width: 800,
            height: 600,
            resizable: true,
            frameless: false,
            transparent: false,
        }
    }
}

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub duration: u32,
    pub background_color: String,
    pub text_color: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            kind: "image".into(),
            content: String::new(),
            duration: 3000,
            background_color: "#ffffff".into(),
            text_color: "#000000".into(),
        }
    }
}

/// Release signing material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningConfig {
    pub keystore_file_in_container: Option<String>,
    pub keystore_password: Option<String>,
    pub key_alias: Option<String>,
    pub key_password: Option<String>,
}

impl SigningConfig {
    /// A release signing config is only generated when every field is set.
    pub fn is_complete(&self) -> bool {
        self.keystore_file_in_container.is_some()
            && self.keystore_password.is_some()
            && self.key_alias.is_some()
            && self.key_password.is_some()
    }
}

/// A reference to a branding image: absent, a local path, or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    None,
    Local(PathBuf),
    Remote(String),
}

impl ImageRef {
    /// Classify an optional config string. `http(s)://` prefixes are remote,
    /// anything else is a local path; empty and absent both mean none.
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            None => Self::None,
            Some(s) if s.trim().is_empty() => Self::None,
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
                Self::Remote(s.to_string())
            }
            Some(s) => Self::Local(Path::new(s).to_path_buf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let cfg = ProjectConfig::default();
        assert_eq!(cfg.build.min_sdk_version, 21);
        assert_eq!(cfg.build.compile_sdk_version, 34);
        assert_eq!(cfg.build.build_tools_version, "34.0.0");
        assert_eq!(cfg.build.output_format, "msi");
        assert!(cfg.webapp.enable_javascript);
        assert!(!cfg.webapp.allow_file_access);
        assert_eq!(cfg.webapp.width, 800);
        assert!(cfg.splash.is_none());
    }

    #[test]
    fn empty_yaml_is_never_fatal() {
        let cfg: ProjectConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.build.target_sdk_version, 34);
        assert_eq!(cfg.webapp.theme_color, "#ffffff");
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let cfg: ProjectConfig = serde_yaml::from_str(
            "app_name: Demo\nbuild:\n  min_sdk_version: 24\nsplash:\n  content: splash.png\n",
        )
        .unwrap();
        assert_eq!(cfg.app_name, "Demo");
        assert_eq!(cfg.build.min_sdk_version, 24);
        assert_eq!(cfg.build.compile_sdk_version, 34);
        let splash = cfg.splash.unwrap();
        assert_eq!(splash.kind, "image");
        assert_eq!(splash.duration, 3000);
    }

    #[test]
    fn image_ref_classification() {
        assert_eq!(ImageRef::from_option(None), ImageRef::None);
        assert_eq!(ImageRef::from_option(Some("")), ImageRef::None);
        assert_eq!(
            ImageRef::from_option(Some("https://x/y.png")),
            ImageRef::Remote("https://x/y.png".into())
        );
        assert_eq!(
            ImageRef::from_option(Some("logo.png")),
            ImageRef::Local(PathBuf::from("logo.png"))
        );
    }

    #[test]
    fn signing_completeness() {
        let mut signing = SigningConfig::default();
        assert!(!signing.is_complete());
        signing.keystore_file_in_container = Some("keys/release.jks".into());
        signing.keystore_password = Some("pw".into());
        signing.key_alias = Some("release".into());
        assert!(!signing.is_complete());
        signing.key_password = Some("pw2".into());
        assert!(signing.is_complete());
    }
}
