//! Devfile selection and root-only detection

mod support;

use stackprobe::{detect_root_component, select_devfile, DevfileType};
use support::copy_fixture;
use yare::parameterized;

fn devfile_registry() -> Vec<DevfileType> {
    vec![
        DevfileType::new("java-maven", "java", "maven").with_tags(["Java", "Maven"]),
        DevfileType::new("java-quarkus", "java", "quarkus").with_tags(["Java", "Quarkus", "Maven"]),
        DevfileType::new("java-micronaut", "java", "micronaut").with_tags(["Java", "Micronaut", "Maven"]),
        DevfileType::new("nodejs", "javascript", "nodejs").with_tags(["NodeJS", "Express", "npm"]),
        DevfileType::new("python-django", "python", "django").with_tags(["Python", "Django", "pip"]),
        DevfileType::new("go", "go", "go").with_tags(["Go", "Gin"]),
        DevfileType::new("dotnet60", "c#", "dotnet").with_tags(["net6.0", "dotnet"]),
    ]
}

#[parameterized(
    quarkus = { "quarkus", "java-quarkus" },
    micronaut = { "micronaut", "java-micronaut" },
    node = { "nodejs-ex", "nodejs" },
    django = { "django", "python-django" },
    golang = { "golang-gin-app", "go" },
    nested_dotnet = { "s2i-dotnetcore-ex", "dotnet60" },
    nested_node = { "double-components", "nodejs" },
)]
fn test_devfile_for_project(project: &str, expected: &str) {
    let (_temp, root) = copy_fixture(project);
    let registry = devfile_registry();

    let picked = select_devfile(&root, &registry).unwrap();
    assert_eq!(picked.map(|d| d.name.as_str()), Some(expected));
}

#[test]
fn test_devfile_from_tree_languages_without_components() {
    let (_temp, root) = copy_fixture("simple");
    let registry = vec![DevfileType::new("python", "python", "python")];

    let picked = select_devfile(&root, &registry).unwrap();
    assert_eq!(picked.map(|d| d.name.as_str()), Some("python"));
}

#[test]
fn test_no_devfile_for_unsupported_language() {
    let (_temp, root) = copy_fixture("net-fsharp");
    assert!(select_devfile(&root, &devfile_registry()).unwrap().is_none());
}

#[test]
fn test_root_detection_ignores_nested_components() {
    let (_temp, root) = copy_fixture("s2i-dotnetcore-ex");
    assert!(detect_root_component(&root).unwrap().is_empty());

    let components = detect_root_component(root.join("app")).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "app");
    assert_eq!(components[0].root_path, root.join("app"));
}

#[test]
fn test_root_detection_of_all_projects_is_empty() {
    let (_temp, root) = copy_fixture("");
    assert!(detect_root_component(&root).unwrap().is_empty());
}
