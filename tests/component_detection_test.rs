//! Component detection over the sample projects in `tests/fixtures/projects`

mod support;

use stackprobe::{
    detect_components, detect_components_from_files, enumerate_files, Component, ComponentDetector,
    ScanConfig,
};
use std::fs::OpenOptions;
use std::io::Write;
use support::{copy_fixture, write_file};
use yare::parameterized;

fn detect_fixture(project: &str) -> Vec<Component> {
    let (_temp, root) = copy_fixture(project);
    detect_components(&root).unwrap()
}

fn detect_fixture_from_files(project: &str) -> Vec<Component> {
    let (_temp, root) = copy_fixture(project);
    let files = enumerate_files(&root).unwrap();
    detect_components_from_files(&files).unwrap()
}

#[parameterized(
    micronaut = { "micronaut", "java", "myMicronautProject" },
    quarkus = { "quarkus", "java", "code-with-quarkus-maven" },
    javascript = { "nodejs-ex", "javascript", "nodejs-starter" },
    django = { "django", "python", "django" },
    dotnet = { "s2i-dotnetcore-ex", "c#", "app" },
    fsharp = { "net-fsharp", "f#", "net-fsharp" },
    vbnet = { "net-vb", "Visual Basic .NET", "net-vb" },
    golang = { "golang-gin-app", "Go", "golang-gin-app" },
    poetry = { "python-poetry", "python", "poetry-sample" },
    multi_target = { "multiple-dotnet-target-frameworks", "c#", "multi-target" },
)]
fn test_single_component_project(project: &str, language: &str, name: &str) {
    for components in [detect_fixture(project), detect_fixture_from_files(project)] {
        assert_eq!(components.len(), 1, "{}: {:?}", project, components);
        let component = &components[0];
        assert!(
            component.languages[0].is(language),
            "{}: expected {}, got {}",
            project,
            language,
            component.languages[0].name
        );
        assert_eq!(component.name, name);
    }
}

#[parameterized(
    micronaut = { "micronaut", &["Micronaut"], &["maven"] },
    quarkus = { "quarkus", &["Quarkus"], &["maven"] },
    express = { "nodejs-ex", &["Express"], &["npm"] },
    django = { "django", &["Django"], &["pip"] },
    aspnet = { "s2i-dotnetcore-ex", &["ASP.NET Core", "net6.0"], &["dotnet"] },
    fsharp = { "net-fsharp", &["net5.0"], &["dotnet"] },
    gin = { "golang-gin-app", &["Gin"], &["Go 1.15"] },
    fastapi = { "python-poetry", &["FastAPI"], &["poetry"] },
    multi_target = { "multiple-dotnet-target-frameworks", &["net6.0", "net5.0", "netcoreapp3.1"], &["dotnet"] },
)]
fn test_frameworks_and_tools(project: &str, frameworks: &[&str], tools: &[&str]) {
    let components = detect_fixture(project);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].frameworks, frameworks);
    assert_eq!(components[0].tools, tools);
}

#[test]
fn test_component_root_path() {
    let (_temp, root) = copy_fixture("s2i-dotnetcore-ex");
    let components = detect_components(&root).unwrap();
    assert_eq!(components[0].root_path, root.join("app"));
}

#[test]
fn test_project_without_manifest_has_no_components() {
    assert!(detect_fixture("simple").is_empty());
    assert!(detect_fixture_from_files("simple").is_empty());
}

#[test]
fn test_double_components() {
    let components = detect_fixture("double-components");
    assert_eq!(components.len(), 2);

    let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["back", "front"]);
    assert!(components.iter().all(|c| c.languages[0].is("javascript")));

    assert_eq!(components[0].frameworks, vec!["Express"]);
    assert_eq!(components[1].frameworks, vec!["React"]);
    assert_eq!(components[1].tools, vec!["yarn"]);
}

#[test]
fn test_gitignore_rule_hides_wrapped_component() {
    let (_temp, root) = copy_fixture("component-wrapped-in-folder");

    let files = enumerate_files(&root).unwrap();
    let components = detect_components_from_files(&files).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "wrapped-quarkus");
    assert_eq!(components[0].root_path, root.join("wrapper").join("quarkus"));

    let mut gitignore = OpenOptions::new()
        .create(true)
        .append(true)
        .open(root.join(".gitignore"))
        .unwrap();
    gitignore.write_all(b"**/quarkus/").unwrap();
    drop(gitignore);

    let files = enumerate_files(&root).unwrap();
    assert!(detect_components_from_files(&files).unwrap().is_empty());
    assert!(detect_components(&root).unwrap().is_empty());
}

#[test]
fn test_all_projects() {
    let (_temp, root) = copy_fixture("");
    let components = detect_components(&root).unwrap();

    let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "wrapped-quarkus",
            "django",
            "back",
            "front",
            "golang-gin-app",
            "myMicronautProject",
            "multi-target",
            "net-fsharp",
            "net-vb",
            "nodejs-starter",
            "poetry-sample",
            "code-with-quarkus-maven",
            "app",
        ]
    );

    for (i, a) in components.iter().enumerate() {
        for b in &components[i + 1..] {
            assert!(!a.root_path.starts_with(&b.root_path));
            assert!(!b.root_path.starts_with(&a.root_path));
        }
    }
}

#[test]
fn test_detection_is_repeatable() {
    let (_temp, root) = copy_fixture("");
    let first = detect_components(&root).unwrap();
    let second = detect_components(&root).unwrap();
    assert_eq!(first, second);

    let single_worker = ComponentDetector::new()
        .with_config(ScanConfig::default().with_workers(1))
        .detect(&root)
        .unwrap();
    assert_eq!(first, single_worker);
}

#[test]
fn test_node_modules_never_scanned() {
    let (_temp, root) = copy_fixture("nodejs-ex");
    write_file(
        &root.join("node_modules/express/package.json"),
        r#"{"name": "express", "version": "4.17.1"}"#,
    );
    write_file(&root.join("node_modules/express/index.js"), "module.exports = {};");

    let files = enumerate_files(&root).unwrap();
    assert!(files.iter().all(|f| !f.starts_with(root.join("node_modules"))));

    let mut with_vendored = files.clone();
    with_vendored.push(root.join("node_modules/express/package.json"));
    with_vendored.push(root.join("node_modules/express/index.js"));

    for components in [
        detect_components(&root).unwrap(),
        detect_components_from_files(&with_vendored).unwrap(),
    ] {
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "nodejs-starter");
    }
}

#[test]
fn test_gitignore_negation_restores_component() {
    let (_temp, root) = copy_fixture("double-components");
    write_file(&root.join(".gitignore"), "*/\n!front/\n");

    let components = detect_components(&root).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "front");
}

#[test]
fn test_max_depth_limits_discovery() {
    let (_temp, root) = copy_fixture("component-wrapped-in-folder");

    let shallow = ComponentDetector::new()
        .with_config(ScanConfig::default().with_max_depth(1))
        .detect(&root)
        .unwrap();
    assert!(shallow.is_empty());

    let deeper = ComponentDetector::new()
        .with_config(ScanConfig::default().with_max_depth(2))
        .detect(&root)
        .unwrap();
    assert_eq!(deeper.len(), 1);
    assert!(deeper[0].languages[0].is("java"));
}

#[test]
fn test_root_manifest_holds_against_large_nested_project() {
    let (_temp, root) = copy_fixture("nodejs-ex");
    write_file(&root.join("backend/requirements.txt"), "flask==2.1.0\n");
    for i in 0..1200 {
        write_file(&root.join(format!("backend/app/module_{}.py", i)), "");
    }

    let components = detect_components(&root).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].root_path, root);
    assert_eq!(components[0].name, "nodejs-starter");
    assert!(components[0].languages[0].is("javascript"));
    assert!(components[0].languages.iter().any(|l| l.is("python")));
}
