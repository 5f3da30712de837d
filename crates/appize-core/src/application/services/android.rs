//! Android platform modifier.
//!
//! Orchestrates one Android pass: builds the Replacement Map from
//! configuration, relocates the namespaced sources first (so every later
//! path is computed under the new package), runs token substitution over the
//! fixed template file list, then derives launcher icons and resolves the
//! splash asset. Each step is fault-isolated: its outcome is recorded and
//! siblings still run; only structural errors escape [`AndroidModifier::apply`].

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::application::ports::{Filesystem, IconEngine, SplashResolver};
use crate::application::report::PlatformReport;
use crate::application::services::{relocation, substitution};
use crate::domain::{
    PackageId, ProjectConfig, ReplacementMap, SigningConfig, StepOutcome, render_gradle_configs,
};
use crate::error::AppizeResult;

/// The package the template project ships under.
pub const TEMPLATE_PACKAGE: &str = "com.example.app";

/// Android platform modifier.
pub struct AndroidModifier {
    fs: Box<dyn Filesystem>,
    icons: Box<dyn IconEngine>,
    splash: Box<dyn SplashResolver>,
}

impl AndroidModifier {
    /// Create a modifier with the given adapters.
    pub fn new(
        fs: Box<dyn Filesystem>,
        icons: Box<dyn IconEngine>,
        splash: Box<dyn SplashResolver>,
    ) -> Self {
        Self { fs, icons, splash }
    }

    /// Apply the configuration to an Android template project in place.
    ///
    /// `project_root` is the Gradle project root (containing `app/`,
    /// `build.gradle`, `settings.gradle`); `assets_root` is where user
    /// assets referenced by relative paths live.
    #[instrument(skip_all, fields(app = %config.app_name, package = %config.package_name))]
    pub fn apply(
        &self,
        config: &ProjectConfig,
        project_root: &Path,
        assets_root: &Path,
    ) -> AppizeResult<PlatformReport> {
        info!("Starting Android modification pass");
        let mut report = PlatformReport::new("android");

        let new_pkg = PackageId::parse(&config.package_name)?;
        let old_pkg = PackageId::parse(TEMPLATE_PACKAGE)?;
        let replacements = build_replacements(config);

        let src_main = project_root.join("app").join("src").join("main");

        // Relocation runs first: substitution targets below are computed
        // from the post-relocation package directory.
        match relocation::relocate_sources(self.fs.as_ref(), &src_main, &old_pkg, &new_pkg) {
            Ok(outcome) => report.push("relocate sources", outcome),
            Err(e) => {
                error!(error = %e, "Source relocation failed; later steps may target stale paths");
                report.push("relocate sources", StepOutcome::failed(e.to_string()));
            }
        }

        for path in template_files(project_root, &src_main, &new_pkg) {
            let label = display_relative(&path, project_root);
            match substitution::replace_tokens(self.fs.as_ref(), &path, &replacements) {
                Ok(outcome) => report.push(label, outcome),
                Err(e) => {
                    error!(file = %path.display(), error = %e, "Placeholder substitution failed");
                    report.push(label, StepOutcome::failed(e.to_string()));
                }
            }
        }

        // Safeguard: the launcher label must resolve even if the token pass
        // missed it (template drift).
        let res_dir = src_main.join("res");
        let strings_xml = res_dir.join("values").join("strings.xml");
        let app_name_rewrite = [(
            format!(
                "<string name=\"app_name\">{}</string>",
                ReplacementMap::token("APP_NAME")
            ),
            format!("<string name=\"app_name\">{}</string>", config.app_name),
        )];
        match substitution::replace_literals(self.fs.as_ref(), &strings_xml, &app_name_rewrite) {
            Ok(outcome) => report.push("app_name safeguard", outcome),
            Err(e) => {
                error!(error = %e, "app_name safeguard failed");
                report.push("app_name safeguard", StepOutcome::failed(e.to_string()));
            }
        }

        // Icons are derived unconditionally so a default set always exists.
        report.push(
            "launcher icons",
            self.icons
                .derive(&config.logo_ref(), &res_dir, &config.webapp.theme_color),
        );

        match &config.splash {
            Some(splash) => report.push(
                "splash image",
                self.splash.resolve(splash, &res_dir, assets_root),
            ),
            None => {
                report.push("splash image", StepOutcome::skipped("no splash section"));
            }
        }

        info!(failed = report.failed_count(), "Android modification pass complete");
        Ok(report)
    }
}

/// The fixed list of template files receiving token substitution.
///
/// A static contract with the template layout; no dynamic discovery.
fn template_files(project_root: &Path, src_main: &Path, pkg: &PackageId) -> Vec<PathBuf> {
    let java_dir = src_main.join("java").join(pkg.dir_path());
    let res_dir = src_main.join("res");
    let app_module = project_root.join("app");

    vec![
        java_dir.join("MainActivity.java"),
        java_dir.join("SplashActivity.java"),
        res_dir.join("values").join("strings.xml"),
        src_main.join("AndroidManifest.xml"),
        res_dir.join("values").join("colors.xml"),
        app_module.join("build.gradle"),
        project_root.join("build.gradle"),
        project_root.join("settings.gradle"),
        project_root.join("gradle.properties"),
    ]
}

/// Build the Android Replacement Map with per-key defaults from config.
pub(crate) fn build_replacements(config: &ProjectConfig) -> ReplacementMap {
    let webapp = &config.webapp;
    let build = &config.build;
    let splash = config.splash.clone().unwrap_or_default();
    let (signing_block, signing_ref) = signing_entries(config.signing.as_ref());

    let mut map = ReplacementMap::new();
    map.set("APP_NAME", config.app_name.clone())
        .set("PACKAGE_NAME", config.package_name.clone())
        .set("URL", config.url.clone())
        // Webapp properties
        .set_bool("ENABLE_JS", webapp.enable_javascript)
        .set_bool("ALLOW_FILE_ACCESS", webapp.allow_file_access)
        .set_bool("FULLSCREEN", webapp.fullscreen)
        .set("THEME_COLOR", webapp.theme_color.clone())
        .set("ORIENTATION", webapp.orientation.clone())
        .set("USER_AGENT", webapp.user_agent.clone())
        .set_bool("BUILT_IN_ZOOM_CONTROLS", webapp.built_in_zoom_controls)
        .set_bool("SUPPORT_ZOOM", webapp.support_zoom)
        // Build-related properties
        .set_num("MIN_SDK_VERSION", build.min_sdk_version)
        .set_num("COMPILE_SDK_VERSION", build.compile_sdk_version)
        .set_num("TARGET_SDK_VERSION", build.target_sdk_version)
        .set("BUILD_TOOLS_VERSION", build.build_tools_version.clone())
        .set_num("VERSION_CODE", build.version_code)
        .set("VERSION_NAME", build.version_name.clone())
        // Splash properties
        .set_num("SPLASH_DURATION", splash.duration)
        .set("SPLASH_TYPE", splash.kind)
        .set("SPLASH_CONTENT", splash.content)
        .set("SPLASH_BACKGROUND_COLOR", splash.background_color)
        .set("SPLASH_TEXT_COLOR", splash.text_color)
        // Injected blocks
        .set(
            "CUSTOM_GRADLE_BUILD_CONFIGS",
            render_gradle_configs(&build.gradle_custom_configs),
        )
        .set("INJECT_ANDROID_SIGNING_CONFIGS", signing_block)
        .set("INJECT_RELEASE_SIGNING_CONFIG", signing_ref);
    map
}

/// Render the Groovy release signing block and its reference.
///
/// Both render empty unless every credential field is present; release
/// builds then fall back to debug signing.
fn signing_entries(signing: Option<&SigningConfig>) -> (String, String) {
    let Some(signing) = signing else {
        return (String::new(), String::new());
    };
    if !signing.is_complete() {
        warn!("Incomplete signing details; release builds fall back to debug signing");
        return (String::new(), String::new());
    }

    // is_complete() guarantees all four fields
    let keystore = signing.keystore_file_in_container.as_deref().unwrap_or_default();
    let store_pw = signing.keystore_password.as_deref().unwrap_or_default();
    let alias = signing.key_alias.as_deref().unwrap_or_default();
    let key_pw = signing.key_password.as_deref().unwrap_or_default();

    info!("Generating production signing configuration");
    let block = format!(
        r#"        release {{
            storeFile file("/{keystore}")
            storePassword "{store_pw}"
            keyAlias "{alias}"
            keyPassword "{key_pw}"
        }}
"#
    );

    (block, "signingConfig signingConfigs.release".to_string())
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
