//! End-to-end CLI tests driving the compiled binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn appize() -> Command {
    let mut cmd = Command::cargo_bin("appize").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

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

#[test]
fn help_lists_apply() {
    appize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_succeeds() {
    appize()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("appize"));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    appize().assert().failure().code(2);
}

#[test]
fn nonexistent_project_root_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("app.yaml");
    std::fs::write(&config, "app_name: Demo\npackage_name: io.demo.app\n").unwrap();

    appize()
        .args(["apply", "--platform", "android", "--config"])
        .arg(&config)
        .arg("--project-root")
        .arg("/definitely/not/here")
        .arg("--assets")
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn missing_config_file_exits_4() {
    let dir = tempfile::tempdir().unwrap();
    appize()
        .args([
            "apply",
            "--config",
            "/definitely/not/here.yaml",
            "--platform",
            "android",
            "--project-root",
        ])
        .arg(dir.path())
        .arg("--assets")
        .arg(dir.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn malformed_yaml_exits_4() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("app.yaml");
    std::fs::write(&config, "app_name: [unterminated\n").unwrap();

    appize()
        .args(["apply", "--platform", "android", "--config"])
        .arg(&config)
        .arg("--project-root")
        .arg(dir.path())
        .arg("--assets")
        .arg(dir.path())
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_platform_exits_2() {
    appize()
        .args([
            "apply",
            "--config",
            "app.yaml",
            "--platform",
            "ios",
            "--project-root",
            ".",
            "--assets",
            ".",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_package_name_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("app.yaml");
    std::fs::write(&config, "app_name: Demo\npackage_name: com..broken\n").unwrap();

    appize()
        .args(["apply", "--platform", "android", "--config"])
        .arg(&config)
        .arg("--project-root")
        .arg(dir.path())
        .arg("--assets")
        .arg(dir.path())
        .assert()
        .failure()
        .code(2);
}

#[test]
fn android_apply_rewrites_the_template() {
    let project = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    seed_android_template(project.path());

    let config = dir.path().join("app.yaml");
    std::fs::write(
        &config,
        "app_name: Field Notes\npackage_name: io.field.notes\nurl: https://notes.example\n",
    )
    .unwrap();

    appize()
        .args(["apply", "--platform", "android", "--config"])
        .arg(&config)
        .arg("--project-root")
        .arg(project.path())
        .arg("--assets")
        .arg(assets.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("android"));

    let main = std::fs::read_to_string(
        project
            .path()
            .join("app/src/main/java/io/field/notes/MainActivity.java"),
    )
    .unwrap();
    assert!(main.starts_with("package io.field.notes;"));
    assert!(main.contains("https://notes.example"));

    // The icon engine ran with the synthetic default.
    assert!(project
        .path()
        .join("app/src/main/res/mipmap-mdpi/ic_launcher.png")
        .exists());
}

#[test]
fn override_config_wins() {
    let project = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    seed_android_template(project.path());

    let base = dir.path().join("base.yaml");
    let prod = dir.path().join("prod.yaml");
    std::fs::write(&base, "app_name: Base Name\npackage_name: io.demo.app\n").unwrap();
    std::fs::write(&prod, "app_name: Prod Name\n").unwrap();

    appize()
        .args(["apply", "--platform", "android", "--config"])
        .arg(&base)
        .arg("--override")
        .arg(&prod)
        .arg("--project-root")
        .arg(project.path())
        .arg("--assets")
        .arg(assets.path())
        .assert()
        .success();

    let strings = std::fs::read_to_string(
        project.path().join("app/src/main/res/values/strings.xml"),
    )
    .unwrap();
    assert!(strings.contains("Prod Name"));
}

#[test]
fn dry_run_writes_nothing() {
    let project = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    seed_android_template(project.path());

    let config = dir.path().join("app.yaml");
    std::fs::write(&config, "app_name: Dry\npackage_name: io.dry.app\n").unwrap();

    appize()
        .args(["apply", "--platform", "android", "--dry-run", "--config"])
        .arg(&config)
        .arg("--project-root")
        .arg(project.path())
        .arg("--assets")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No files were written"));

    // Template untouched: old package still in place, no icons derived.
    assert!(project
        .path()
        .join("app/src/main/java/com/example/app/MainActivity.java")
        .exists());
    assert!(!project.path().join("app/src/main/res/mipmap-mdpi").exists());
}

#[test]
fn desktop_apply_rewrites_descriptor() {
    let project = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let shell = project.path().join("src-tauri");
    write(
        &shell.join("tauri.conf.json"),
        r#"{
  "productName": "{{APP_NAME}}",
  "version": "0.0.0",
  "identifier": "com.template.shell",
  "bundle": { "targets": ["msi"], "icon": ["icons/placeholder.png"] },
  "app": { "windows": [ { "title": "T", "width": 640, "height": 480 } ] }
}"#,
    );
    write(
        &shell.join("Cargo.toml"),
        "[package]\nname = \"{{PACKAGE_NAME}}\"\nauthors = [\"{{AUTHOR}}\"]\n",
    );

    let config = dir.path().join("app.yaml");
    std::fs::write(
        &config,
        "app_name: Desk Top\npackage_name: com.desk.top\nurl: https://desk.example\n",
    )
    .unwrap();

    appize()
        .args(["apply", "--platform", "desktop", "--config"])
        .arg(&config)
        .arg("--project-root")
        .arg(project.path())
        .arg("--assets")
        .arg(assets.path())
        .assert()
        .success();

    let descriptor: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(shell.join("tauri.conf.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(descriptor["productName"], "Desk Top");
    assert_eq!(descriptor["app"]["windows"][0]["url"], "https://desk.example");
}

#[test]
fn completions_bash_emits_script() {
    appize()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appize"));
}
