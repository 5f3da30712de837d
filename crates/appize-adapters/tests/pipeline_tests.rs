//! End-to-end platform passes with the real adapters.

use std::path::Path;

use appize_adapters::{
    FileSplashResolver, LocalFilesystem, MemoryFilesystem, RasterEngine, StaticFetcher,
};
use appize_core::{
    application::{AndroidModifier, DesktopModifier},
    domain::{ProjectConfig, SplashConfig, StepOutcome},
    application::ports::Filesystem,
};

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn seed_android_template(root: &Path) {
    let src_main = root.join("app/src/main");
    let pkg = src_main.join("java/com/example/app");
    write(
        &pkg.join("MainActivity.java"),
        "package com.example.app;\n// loads {{URL}}\n",
    );
    write(
        &pkg.join("SplashActivity.java"),
        "package com.example.app;\n// delay {{SPLASH_DURATION}}\n",
    );
    write(
        &src_main.join("res/values/strings.xml"),
        "<resources><string name=\"app_name\">{{APP_NAME}}</string></resources>\n",
    );
    write(
        &src_main.join("AndroidManifest.xml"),
        "<manifest package=\"{{PACKAGE_NAME}}\"/>\n",
    );
    write(
        &src_main.join("res/values/colors.xml"),
        "<color name=\"theme\">{{THEME_COLOR}}</color>\n",
    );
    write(
        &root.join("app/build.gradle"),
        "minSdkVersion {{MIN_SDK_VERSION}}\n{{CUSTOM_GRADLE_BUILD_CONFIGS}}",
    );
    write(&root.join("build.gradle"), "// root\n");
    write(
        &root.join("settings.gradle"),
        "rootProject.name = '{{APP_NAME}}'\n",
    );
    write(&root.join("gradle.properties"), "org.gradle.jvmargs=-Xmx2g\n");
}

fn android_modifier(fetcher: StaticFetcher) -> AndroidModifier {
    AndroidModifier::new(
        Box::new(LocalFilesystem::new()),
        Box::new(RasterEngine::new(Box::new(fetcher.clone()))),
        Box::new(FileSplashResolver::new(Box::new(fetcher))),
    )
}

#[test]
fn android_pass_over_real_directories() {
    let project = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    seed_android_template(project.path());
    write(&assets.path().join("splash.png"), "splash-bytes");

    let mut config = ProjectConfig::default();
    config.app_name = "Field Notes".into();
    config.package_name = "io.field.notes".into();
    config.url = "https://notes.example".into();
    config.splash = Some(SplashConfig {
        kind: "image".into(),
        content: "splash.png".into(),
        ..SplashConfig::default()
    });

    let report = android_modifier(StaticFetcher::new())
        .apply(&config, project.path(), assets.path())
        .unwrap();
    let steps: Vec<_> = report.steps().collect();
    assert_eq!(report.failed_count(), 0, "steps: {steps:?}");

    let src_main = project.path().join("app/src/main");
    let main =
        std::fs::read_to_string(src_main.join("java/io/field/notes/MainActivity.java")).unwrap();
    assert!(main.starts_with("package io.field.notes;"));
    assert!(main.contains("https://notes.example"));
    assert!(!src_main.join("java/com").exists());

    let strings = std::fs::read_to_string(src_main.join("res/values/strings.xml")).unwrap();
    assert!(strings.contains("<string name=\"app_name\">Field Notes</string>"));

    // The raster engine produced the full launcher set.
    let res = src_main.join("res");
    assert!(res.join("mipmap-xxxhdpi/ic_launcher.png").exists());
    assert!(res.join("mipmap-anydpi-v26/ic_launcher.xml").exists());

    // And the splash landed in drawable.
    assert_eq!(
        std::fs::read(res.join("drawable/splash.png")).unwrap(),
        b"splash-bytes"
    );
}

#[test]
fn android_pass_is_idempotent() {
    let project = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    seed_android_template(project.path());

    let mut config = ProjectConfig::default();
    config.app_name = "Twice".into();
    config.package_name = "io.twice.app".into();

    let modifier = android_modifier(StaticFetcher::new());
    modifier.apply(&config, project.path(), assets.path()).unwrap();
    let second = modifier.apply(&config, project.path(), assets.path()).unwrap();

    assert_eq!(second.failed_count(), 0);
    // Sources already live under the new package; the second relocation
    // finds nothing to move.
    assert_eq!(
        second.outcome_of("relocate sources"),
        Some(&StepOutcome::skipped("old namespace directory not found"))
    );
    let manifest = std::fs::read_to_string(
        project.path().join("app/src/main/AndroidManifest.xml"),
    )
    .unwrap();
    assert!(manifest.contains("io.twice.app"));
}

#[test]
fn desktop_pass_over_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/proj");
    let shell = root.join("src-tauri");
    fs.create_dir_all(&shell.join("icons")).unwrap();
    fs.write_file(
        &shell.join("tauri.conf.json"),
        r#"{
  "productName": "{{APP_NAME}}",
  "version": "0.0.0",
  "identifier": "com.template.shell",
  "bundle": { "targets": ["msi"], "icon": ["icons/placeholder.png"] },
  "app": { "windows": [ { "title": "T", "width": 640, "height": 480 } ] }
}"#,
    )
    .unwrap();
    fs.write_file(
        &shell.join("Cargo.toml"),
        "[package]\nname = \"{{PACKAGE_NAME}}\"\nauthors = [\"{{AUTHOR}}\"]\n",
    )
    .unwrap();

    let mut config = ProjectConfig::default();
    config.app_name = "Desk Top".into();
    config.package_name = "com.desk.top".into();
    config.url = "https://desk.example".into();

    let report = DesktopModifier::new(Box::new(fs.clone()))
        .apply(&config, root, Path::new("/assets"))
        .unwrap();
    assert_eq!(report.failed_count(), 0);

    let descriptor: serde_json::Value =
        serde_json::from_str(&fs.read_file(&shell.join("tauri.conf.json")).unwrap()).unwrap();
    assert_eq!(descriptor["productName"], "Desk Top");
    assert_eq!(descriptor["identifier"], "com.desk.top");
    assert_eq!(descriptor["app"]["windows"][0]["url"], "https://desk.example");

    let manifest = fs.read_file(&shell.join("Cargo.toml")).unwrap();
    assert!(manifest.contains("name = \"Desk_Top\""));
}

#[test]
fn desktop_pass_isolates_a_missing_descriptor() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/proj");
    let shell = root.join("src-tauri");
    fs.create_dir_all(&shell).unwrap();
    fs.write_file(
        &shell.join("Cargo.toml"),
        "[package]\nname = \"{{PACKAGE_NAME}}\"\n",
    )
    .unwrap();

    let mut config = ProjectConfig::default();
    config.app_name = "Shell Only".into();
    config.package_name = "com.shell.only".into();

    // No tauri.conf.json in the tree: the pass must still complete and
    // report the rewrite as skipped rather than erroring out.
    let report = DesktopModifier::new(Box::new(fs.clone()))
        .apply(&config, root, Path::new("/assets"))
        .unwrap();

    assert_eq!(
        report.outcome_of("descriptor rewrite"),
        Some(&StepOutcome::skipped("descriptor not found"))
    );
    assert!(fs
        .read_file(&shell.join("Cargo.toml"))
        .unwrap()
        .contains("Shell_Only"));
}

#[test]
fn desktop_pass_stages_local_web_content() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/proj");
    let shell = root.join("src-tauri");
    fs.create_dir_all(&shell).unwrap();
    fs.write_file(
        &shell.join("tauri.conf.json"),
        r#"{
  "productName": "{{APP_NAME}}",
  "bundle": { "targets": ["msi"], "icon": [] },
  "app": { "windows": [ { "title": "T" } ] }
}"#,
    )
    .unwrap();
    fs.write_file(&shell.join("Cargo.toml"), "[package]\n").unwrap();
    fs.create_dir_all(Path::new("/assets")).unwrap();
    fs.write_file(Path::new("/assets/index.html"), "<html>").unwrap();

    let mut config = ProjectConfig::default();
    config.app_name = "Local Shell".into();
    config.package_name = "com.local.shell".into();
    config.url = "file:///index.html".into();

    let report = DesktopModifier::new(Box::new(fs.clone()))
        .apply(&config, root, Path::new("/assets"))
        .unwrap();
    assert_eq!(report.outcome_of("web content"), Some(&StepOutcome::Applied));

    assert_eq!(
        fs.read_file(&root.join("dist/index.html")).unwrap(),
        "<html>"
    );
    let descriptor: serde_json::Value =
        serde_json::from_str(&fs.read_file(&shell.join("tauri.conf.json")).unwrap()).unwrap();
    assert_eq!(descriptor["app"]["windows"][0]["url"], "index.html");
}
