//! Component name extraction from manifests

use super::{FrameworkProbe, ProbeContext, ProbeMatch};
use crate::stack::LanguageId;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

type NameExtractor = fn(content: &str, manifest: &Path) -> Result<Option<String>>;

/// Reads a declared project name out of one manifest type
pub struct ManifestNameProbe {
    pub id: &'static str,
    pub manifest: &'static str,
    pub languages: &'static [LanguageId],
    pub extract: NameExtractor,
}

impl FrameworkProbe for ManifestNameProbe {
    fn id(&self) -> &str {
        self.id
    }

    fn languages(&self) -> &[LanguageId] {
        self.languages
    }

    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>> {
        for manifest in ctx.direct_matches(self.manifest) {
            let content = ctx.read(manifest)?;
            if let Some(name) = (self.extract)(&content, manifest)? {
                let name = name.trim();
                if !name.is_empty() {
                    return Ok(Some(ProbeMatch::named(name)));
                }
            }
        }
        Ok(None)
    }
}

const JVM: &[LanguageId] = &[LanguageId::Java, LanguageId::Kotlin];
const NODE: &[LanguageId] = &[LanguageId::JavaScript, LanguageId::TypeScript];

pub fn default_name_probes() -> Vec<ManifestNameProbe> {
    vec![
        ManifestNameProbe {
            id: "maven-artifact",
            manifest: "pom.xml",
            languages: JVM,
            extract: maven_artifact_id,
        },
        ManifestNameProbe {
            id: "gradle-root-project",
            manifest: "settings.gradle",
            languages: JVM,
            extract: gradle_root_project,
        },
        ManifestNameProbe {
            id: "gradle-root-project-kts",
            manifest: "settings.gradle.kts",
            languages: JVM,
            extract: gradle_root_project,
        },
        ManifestNameProbe {
            id: "package-json-name",
            manifest: "package.json",
            languages: NODE,
            extract: package_json_name,
        },
        ManifestNameProbe {
            id: "pyproject-name",
            manifest: "pyproject.toml",
            languages: &[LanguageId::Python],
            extract: pyproject_name,
        },
        ManifestNameProbe {
            id: "setup-py-name",
            manifest: "setup.py",
            languages: &[LanguageId::Python],
            extract: setup_py_name,
        },
        ManifestNameProbe {
            id: "go-module",
            manifest: "go.mod",
            languages: &[LanguageId::Go],
            extract: go_module_name,
        },
        ManifestNameProbe {
            id: "csproj-stem",
            manifest: "*.csproj",
            languages: &[LanguageId::CSharp],
            extract: file_stem,
        },
        ManifestNameProbe {
            id: "fsproj-stem",
            manifest: "*.fsproj",
            languages: &[LanguageId::FSharp],
            extract: file_stem,
        },
        ManifestNameProbe {
            id: "vbproj-stem",
            manifest: "*.vbproj",
            languages: &[LanguageId::VisualBasic],
            extract: file_stem,
        },
        ManifestNameProbe {
            id: "cargo-package",
            manifest: "Cargo.toml",
            languages: &[LanguageId::Rust],
            extract: cargo_package_name,
        },
        ManifestNameProbe {
            id: "composer-name",
            manifest: "composer.json",
            languages: &[LanguageId::Php],
            extract: composer_name,
        },
        ManifestNameProbe {
            id: "gemspec-stem",
            manifest: "*.gemspec",
            languages: &[LanguageId::Ruby],
            extract: file_stem,
        },
        ManifestNameProbe {
            id: "mix-app",
            manifest: "mix.exs",
            languages: &[LanguageId::Elixir],
            extract: mix_app_name,
        },
    ]
}

/// `<artifactId>` as a direct child of `<project>`, never the parent's
fn maven_artifact_id(content: &str, _manifest: &Path) -> Result<Option<String>> {
    let doc = roxmltree::Document::parse(content).context("Failed to parse pom.xml")?;
    let artifact = doc
        .root_element()
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "artifactId")
        .and_then(|n| n.text())
        .map(|t| t.to_string());
    Ok(artifact)
}

fn gradle_root_project(content: &str, _manifest: &Path) -> Result<Option<String>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"rootProject\.name\s*=\s*["']([^"']+)["']"#).expect("valid regex")
    });
    Ok(re.captures(content).map(|c| c[1].to_string()))
}

fn package_json_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    let json: serde_json::Value =
        serde_json::from_str(content).context("Failed to parse package.json")?;
    Ok(json
        .get("name")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string()))
}

fn pyproject_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    let toml: toml::Value = toml::from_str(content).context("Failed to parse pyproject.toml")?;
    let name = toml
        .get("project")
        .and_then(|p| p.get("name"))
        .or_else(|| {
            toml.get("tool")
                .and_then(|t| t.get("poetry"))
                .and_then(|p| p.get("name"))
        })
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());
    Ok(name)
}

fn setup_py_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r#"\bname\s*=\s*["']([^"']+)["']"#).expect("valid regex"));
    Ok(re.captures(content).map(|c| c[1].to_string()))
}

/// Last segment of the module path (`github.com/acme/api` -> `api`)
fn go_module_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    let module = content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("module "))
        .map(|m| m.trim().trim_matches('"'));
    Ok(module.and_then(|m| m.rsplit('/').next()).map(|s| s.to_string()))
}

fn file_stem(_content: &str, manifest: &Path) -> Result<Option<String>> {
    Ok(manifest
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string()))
}

fn cargo_package_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    let toml: toml::Value = toml::from_str(content).context("Failed to parse Cargo.toml")?;
    Ok(toml
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string()))
}

/// Package part of `vendor/package`
fn composer_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    let json: serde_json::Value =
        serde_json::from_str(content).context("Failed to parse composer.json")?;
    Ok(json
        .get("name")
        .and_then(|v| v.as_str())
        .and_then(|s| s.rsplit('/').next())
        .map(|s| s.to_string()))
}

fn mix_app_name(content: &str, _manifest: &Path) -> Result<Option<String>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\bapp:\s*:(\w+)").expect("valid regex"));
    Ok(re.captures(content).map(|c| c[1].to_string()))
}
