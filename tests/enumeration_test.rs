//! File enumeration and error handling through the public API

mod support;

use serial_test::serial;
use stackprobe::{
    detect_components, enumerate_files, CancellationToken, ComponentDetector, DetectError,
    ScanConfig,
};
use std::env;
use std::path::PathBuf;
use support::{copy_fixture, write_file};
use tempfile::TempDir;

#[test]
fn test_enumerate_is_sorted_and_absolute() {
    let (_temp, root) = copy_fixture("golang-gin-app");
    let files = enumerate_files(&root).unwrap();

    assert_eq!(
        files,
        vec![
            root.join("go.mod"),
            root.join("handlers").join("ping.go"),
            root.join("main.go"),
        ]
    );
}

#[test]
fn test_enumerate_skips_default_ignored_dirs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();
    write_file(&root.join("app.py"), "print('hi')");
    write_file(&root.join(".git/config"), "[core]");
    write_file(&root.join("venv/lib/site.py"), "");
    write_file(&root.join("__pycache__/app.cpython-311.pyc"), "");

    assert_eq!(enumerate_files(&root).unwrap(), vec![root.join("app.py")]);
}

#[test]
fn test_default_ignores_cannot_be_negated() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();
    write_file(&root.join(".gitignore"), "!node_modules/\n");
    write_file(&root.join("index.js"), "");
    write_file(&root.join("node_modules/lib/index.js"), "");

    assert_eq!(enumerate_files(&root).unwrap(), vec![root.join("index.js")]);
}

#[test]
fn test_nested_gitignore_applies_below_its_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();
    write_file(&root.join("api/.gitignore"), "generated/\n*.log\n");
    write_file(&root.join("api/main.go"), "package main");
    write_file(&root.join("api/server.log"), "");
    write_file(&root.join("api/generated/types.go"), "");
    write_file(&root.join("web/generated/bundle.js"), "");
    write_file(&root.join("web/server.log"), "");

    let files = enumerate_files(&root).unwrap();
    assert_eq!(
        files,
        vec![
            root.join("api/.gitignore"),
            root.join("api/main.go"),
            root.join("web/generated/bundle.js"),
            root.join("web/server.log"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_component_skipped_without_error() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let (_temp, root) = copy_fixture("double-components");
    let locked = root.join("back");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Permissions are not enforced for root
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = detect_components(&root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let components = result.unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "front");
}

#[test]
fn test_missing_root_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    match detect_components(&missing) {
        Err(DetectError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_file_root_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("pom.xml");
    write_file(&file, "<project/>");

    assert!(matches!(
        enumerate_files(&file),
        Err(DetectError::NotADirectory(path)) if path == file
    ));
}

#[test]
fn test_cancelled_before_start() {
    let (_temp, root) = copy_fixture("quarkus");
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = ComponentDetector::new()
        .with_cancellation(cancel)
        .detect(&root);
    assert!(matches!(result, Err(DetectError::Cancelled)));
}

#[test]
fn test_invalid_share_rejected() {
    let (_temp, root) = copy_fixture("quarkus");
    let config = ScanConfig {
        min_language_share: 1.5,
        ..ScanConfig::default()
    };

    assert!(matches!(
        ComponentDetector::new().with_config(config).detect(&root),
        Err(DetectError::Config(_))
    ));
}

#[test]
#[serial]
fn test_relative_file_list_resolved_against_cwd() {
    let (_temp, root) = copy_fixture("golang-gin-app");
    let previous = env::current_dir().unwrap();
    env::set_current_dir(&root).unwrap();

    let files: Vec<PathBuf> = ["go.mod", "main.go", "handlers/ping.go"]
        .iter()
        .map(PathBuf::from)
        .collect();
    let result = ComponentDetector::new().detect_from_files(&files);
    env::set_current_dir(previous).unwrap();

    let components = result.unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "golang-gin-app");
    assert_eq!(components[0].root_path, root);
}

#[test]
#[serial]
fn test_config_from_env_drives_detection() {
    let (_temp, root) = copy_fixture("component-wrapped-in-folder");
    env::set_var("STACKPROBE_MAX_DEPTH", "1");
    env::set_var("STACKPROBE_WORKERS", "2");
    let config = ScanConfig::from_env();
    env::remove_var("STACKPROBE_MAX_DEPTH");
    env::remove_var("STACKPROBE_WORKERS");

    let config = config.unwrap();
    assert_eq!(config.max_depth, Some(1));
    assert_eq!(config.workers, 2);
    assert!(ComponentDetector::new()
        .with_config(config)
        .detect(&root)
        .unwrap()
        .is_empty());
}

#[test]
fn test_explain_names_deciding_gitignore_rule() {
    let (_temp, root) = copy_fixture("component-wrapped-in-folder");
    let detector = ComponentDetector::new();
    let pom = PathBuf::from("wrapper/quarkus/pom.xml");
    assert_eq!(detector.explain(&root, &pom).unwrap(), None);

    write_file(&root.join(".gitignore"), "**/quarkus/\n");
    let rule = detector.explain(&root, &pom).unwrap().unwrap();
    assert_eq!(rule.pattern, "**/quarkus/");
    assert_eq!(rule.scope, root);
    assert!(rule.directory_only);
    assert!(!rule.negated);
}
